//! Persisted library of saved design tokens.
//!
//! The whole collection lives as one JSON array under [`TOKENS_KEY`]. Persistence is
//! best-effort: read failures yield an empty library, write failures are logged and dropped.
//! Records that fail to decode are hidden from readers but written back untouched, and an
//! array that cannot be read at all is never overwritten.

use crate::storage::{Storage, StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(target_arch = "wasm32")]
use web_time::{SystemTime, UNIX_EPOCH};

/// Storage key holding the token array.
pub const TOKENS_KEY: &str = "design-system-tokens";

/// Kind of value a token carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Color,
    Dimension,
    #[serde(other)]
    Other,
}

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Color => "color",
            ValueType::Dimension => "dimension",
            ValueType::Other => "other",
        }
    }
}

impl std::str::FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "color" => Ok(ValueType::Color),
            "dimension" => Ok(ValueType::Dimension),
            "other" => Ok(ValueType::Other),
            other => Err(format!("Unknown value type: {other}")),
        }
    }
}

/// A token as stored. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedToken {
    pub id: String,
    pub name: String,
    pub property: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
}

/// Input for [`TokenLibrary::save`]: everything except id and timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewToken {
    pub name: String,
    pub property: String,
    pub value: Option<String>,
    pub value_type: Option<ValueType>,
    pub format: Option<String>,
}

/// Saved token collection over an injectable storage backend.
pub struct TokenLibrary<S: Storage> {
    storage: Arc<S>,
}

impl<S: Storage> TokenLibrary<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Get a reference to the storage backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    /// All saved tokens in insertion order. Empty on any read or parse failure.
    pub fn list(&self) -> Vec<SavedToken> {
        match self.load() {
            Ok(records) => records.iter().filter_map(decode).collect(),
            Err(e) => {
                log::warn!("Token library unreadable, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Raw stored records. Absent key is an empty library.
    fn load(&self) -> StorageResult<Vec<Value>> {
        match self.storage.get(TOKENS_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(serialization),
            None => Ok(Vec::new()),
        }
    }

    fn store(&self, records: &[Value]) -> StorageResult<()> {
        let json = serde_json::to_string(records).map_err(serialization)?;
        self.storage.set(TOKENS_KEY, &json)
    }

    /// Look up a token by id.
    pub fn get(&self, id: &str) -> Option<SavedToken> {
        self.list().into_iter().find(|t| t.id == id)
    }

    /// Mint an id and timestamp, append, and persist.
    pub fn save(&self, token: NewToken) -> SavedToken {
        let saved = SavedToken {
            id: Uuid::new_v4().to_string(),
            name: token.name,
            property: token.property,
            value: token.value,
            value_type: token.value_type,
            format: token.format,
            created_at: now_millis(),
        };
        let result = self.load().and_then(|mut records| {
            records.push(serde_json::to_value(&saved).map_err(serialization)?);
            self.store(&records)
        });
        match result {
            Ok(()) => log::debug!("Saved token {} ({})", saved.name, saved.id),
            Err(e) => log::warn!("Failed to persist token {}: {}", saved.name, e),
        }
        saved
    }

    /// Remove every token whose id is in `ids`.
    pub fn delete_many(&self, ids: &[String]) {
        let result = self.load().and_then(|mut records| {
            let before = records.len();
            records.retain(|record| !record_id(record).is_some_and(|id| ids.iter().any(|x| x == id)));
            self.store(&records)?;
            Ok(before - records.len())
        });
        match result {
            Ok(removed) => log::debug!("Deleted {} token(s)", removed),
            Err(e) => log::warn!("Failed to persist token library: {}", e),
        }
    }

    /// Erase the whole library.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(TOKENS_KEY) {
            log::warn!("Failed to clear token library: {}", e);
        }
    }
}

fn decode(record: &Value) -> Option<SavedToken> {
    match SavedToken::deserialize(record) {
        Ok(token) => Some(token),
        Err(e) => {
            log::warn!("Skipping unreadable token record: {}", e);
            None
        }
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

fn serialization(e: serde_json::Error) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    /// Backend whose every operation fails, like disabled browser storage.
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("disabled".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Io("quota exceeded".into()))
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("disabled".into()))
        }
    }

    fn color_token() -> NewToken {
        NewToken {
            name: "button-color-background-primary-default".into(),
            property: "color".into(),
            value: Some("#EA580C".into()),
            value_type: Some(ValueType::Color),
            format: Some("kebab".into()),
        }
    }

    #[test]
    fn test_save_then_list() {
        let library = TokenLibrary::new(Arc::new(MemoryStorage::new()));
        let saved = library.save(color_token());

        let tokens = library.list();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], saved);
        assert_eq!(tokens[0].name, "button-color-background-primary-default");
        assert_eq!(tokens[0].property, "color");
        assert_eq!(tokens[0].value.as_deref(), Some("#EA580C"));
        assert!(!saved.id.is_empty());
        assert!(saved.created_at > 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let library = TokenLibrary::new(Arc::new(MemoryStorage::new()));
        let a = library.save(color_token());
        let b = library.save(color_token());
        assert_ne!(a.id, b.id);
        assert_eq!(library.list().len(), 2);
    }

    #[test]
    fn test_delete_many() {
        let library = TokenLibrary::new(Arc::new(MemoryStorage::new()));
        let saved = library.save(color_token());
        library.delete_many(&[saved.id.clone()]);
        assert!(library.list().is_empty());
        assert_eq!(library.get(&saved.id), None);
    }

    #[test]
    fn test_delete_keeps_others() {
        let library = TokenLibrary::new(Arc::new(MemoryStorage::new()));
        let a = library.save(color_token());
        let b = library.save(NewToken { name: "card-radius".into(), ..NewToken::default() });
        library.delete_many(&[a.id, "unknown".to_string()]);
        assert_eq!(library.list(), vec![b]);
    }

    #[test]
    fn test_clear() {
        let storage = Arc::new(MemoryStorage::new());
        let library = TokenLibrary::new(storage.clone());
        library.save(color_token());
        library.clear();
        assert!(library.list().is_empty());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_corrupt_data_reads_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKENS_KEY, "{not json").unwrap();
        let library = TokenLibrary::new(storage);
        assert!(library.list().is_empty());
    }

    #[test]
    fn test_corrupt_data_is_not_overwritten() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKENS_KEY, "{not json").unwrap();
        let library = TokenLibrary::new(storage.clone());
        library.save(color_token());
        library.delete_many(&["x".to_string()]);
        assert_eq!(storage.get(TOKENS_KEY).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_unknown_value_type_reads_as_other() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(
                TOKENS_KEY,
                r#"[{"id":"k1","name":"keep-me","property":"color","createdAt":1},
                    {"id":"k2","name":"label","property":"text","valueType":"string","createdAt":2}]"#,
            )
            .unwrap();
        let tokens = TokenLibrary::new(storage).list();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].name, "keep-me");
        assert_eq!(tokens[1].value_type, Some(ValueType::Other));
    }

    #[test]
    fn test_undecodable_records_survive_writes() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(
                TOKENS_KEY,
                r#"[{"id":"k1","name":"keep-me","property":"color","createdAt":1},
                    {"id":"k2","name":42},
                    {"id":"k3","name":"drop-me","property":"color","createdAt":3}]"#,
            )
            .unwrap();
        let library = TokenLibrary::new(storage.clone());
        assert_eq!(library.list().len(), 2);

        let saved = library.save(NewToken { name: "new".into(), ..NewToken::default() });
        library.delete_many(&["k3".to_string()]);

        let names: Vec<String> = library.list().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["keep-me".to_string(), saved.name]);

        let raw: Vec<Value> = serde_json::from_str(&storage.get(TOKENS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw[1]["id"], "k2");
        assert_eq!(raw[1]["name"], 42);
    }

    #[test]
    fn test_broken_backend_fails_open() {
        let library = TokenLibrary::new(Arc::new(BrokenStorage));
        assert!(library.list().is_empty());
        let saved = library.save(color_token());
        assert_eq!(saved.name, "button-color-background-primary-default");
        library.delete_many(&[saved.id]);
        library.clear();
        assert!(library.list().is_empty());
    }

    #[test]
    fn test_persisted_layout() {
        let storage = Arc::new(MemoryStorage::new());
        let library = TokenLibrary::new(storage.clone());
        library.save(NewToken { name: "a".into(), property: "p".into(), ..NewToken::default() });

        let json = storage.get(TOKENS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let record = &value[0];
        assert!(record["createdAt"].is_u64());
        assert!(record.get("value").is_none());
        assert!(record.get("valueType").is_none());
    }

    #[test]
    fn test_reads_records_without_optional_fields() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(
                TOKENS_KEY,
                r#"[{"id":"x1","name":"card-radius","property":"radius","createdAt":1700000000000},
                    {"id":"x2","name":"gap","property":"spacing","value":"8px","valueType":"dimension","createdAt":1}]"#,
            )
            .unwrap();
        let tokens = TokenLibrary::new(storage).list();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].value, None);
        assert_eq!(tokens[1].value_type, Some(ValueType::Dimension));
    }
}
