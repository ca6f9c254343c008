//! Directory-backed storage for native builds. One `<key>.json` file per key.

use super::{Storage, StorageError, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create, if needed) a storage directory.
    pub fn new(dir: PathBuf) -> StorageResult<Self> {
        fs::create_dir_all(&dir)
            .map_err(|e| StorageError::Io(format!("Cannot create {}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    /// `<data local dir>/swatchbook/storage`, e.g. `~/.local/share/swatchbook/storage` on Linux.
    pub fn default_location() -> StorageResult<Self> {
        let data = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Unavailable("No data directory for this user".to_string()))?;
        Self::new(data.join("swatchbook").join("storage"))
    }

    pub fn base_path(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }
}

/// Keys become file names: anything outside `[A-Za-z0-9_-]` maps to `_`.
fn file_stem(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect()
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("Cannot read {}: {}", path.display(), e))),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        // Write beside the target and rename so readers never see a torn file.
        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)
            .and_then(|()| fs::rename(&staging, &path))
            .map_err(|e| StorageError::Io(format!("Cannot write {}: {}", path.display(), e)))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Err(e) if e.kind() != ErrorKind::NotFound => {
                Err(StorageError::Io(format!("Cannot delete {}: {}", path.display(), e)))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open() -> (TempDir, FileStorage) {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path().to_path_buf()).unwrap();
        (tmp, storage)
    }

    #[test]
    fn test_round_trip_on_disk() {
        let (tmp, storage) = open();
        storage.set("design-system-tokens", "[]").unwrap();
        assert_eq!(storage.get("design-system-tokens").unwrap().as_deref(), Some("[]"));
        assert!(tmp.path().join("design-system-tokens.json").is_file());
        assert!(!tmp.path().join("design-system-tokens.json.tmp").exists());
    }

    #[test]
    fn test_absent_key() {
        let (_tmp, storage) = open();
        assert_eq!(storage.get("nothing-here").unwrap(), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_tmp, storage) = open();
        storage.set("k", "1").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_nested_directory_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        let storage = FileStorage::new(nested.clone()).unwrap();
        assert_eq!(storage.base_path(), nested.as_path());
        assert!(nested.is_dir());
    }

    #[test]
    fn test_unsafe_key_characters() {
        let (tmp, storage) = open();
        storage.set("../tokens:v1", "x").unwrap();
        assert_eq!(storage.get("../tokens:v1").unwrap().as_deref(), Some("x"));
        assert!(tmp.path().join("___tokens_v1.json").is_file());
    }
}
