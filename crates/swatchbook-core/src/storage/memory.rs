//! Process-local storage. Used by tests and as a throwaway backend.

use super::{Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

fn poisoned<T>(e: PoisonError<T>) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.write().map_err(poisoned)?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_after_set() {
        let memory = MemoryStorage::new();
        memory.set("key", "[1,2]").unwrap();
        assert_eq!(memory.get("key").unwrap().as_deref(), Some("[1,2]"));
        assert_eq!(memory.get("other").unwrap(), None);
    }

    #[test]
    fn test_set_replaces() {
        let memory = MemoryStorage::new();
        memory.set("key", "a").unwrap();
        memory.set("key", "b").unwrap();
        assert_eq!(memory.get("key").unwrap().as_deref(), Some("b"));
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_remove_twice() {
        let memory = MemoryStorage::new();
        memory.set("key", "a").unwrap();
        memory.remove("key").unwrap();
        memory.remove("key").unwrap();
        assert!(memory.is_empty());
    }
}
