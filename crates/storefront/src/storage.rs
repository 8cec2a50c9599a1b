//! Key-value storage backends for persisted client state.
//!
//! The storefront persists exactly one kind of blob (the serialized cart),
//! but the surface is a small string key-value store so callers never see
//! filesystem details. Two backends: [`MemoryStorage`] for volatile
//! sessions and tests, [`FileStorage`] for state that survives restarts.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

/// Storage errors surfaced to callers that opt into handling them.
///
/// The cart store itself swallows these at its boundary; they matter to
/// setup code (e.g., creating the data directory).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A durable slot for string values addressed by key.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile in-process storage. State lives for the session only.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: one JSON object file inside a data directory.
///
/// Every `set` rewrites the whole file. A missing file reads as empty; a
/// corrupt file is logged and treated as empty rather than failing the
/// caller, mirroring how the cart tolerates a corrupt slot.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    const FILE_NAME: &'static str = "storage.json";

    /// Open (or create) file-backed storage inside `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(Self::FILE_NAME),
        })
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_entries(&self) -> Result<HashMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt storage file, starting over");
                Ok(HashMap::new())
            }
        }
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load_entries()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load_entries()?;
        entries.insert(key.to_string(), value.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::default();
        assert_eq!(storage.get("cart").expect("get"), None);

        storage.set("cart", "{}").expect("set");
        assert_eq!(storage.get("cart").expect("get"), Some("{}".to_string()));

        storage.set("cart", "[1]").expect("set");
        assert_eq!(storage.get("cart").expect("get"), Some("[1]".to_string()));
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut storage = FileStorage::open(dir.path()).expect("open");

        assert_eq!(storage.get("cart").expect("get"), None);
        storage.set("cart", "saved").expect("set");
        assert_eq!(storage.get("cart").expect("get"), Some("saved".to_string()));

        // A fresh handle over the same directory sees the value.
        let reopened = FileStorage::open(dir.path()).expect("reopen");
        assert_eq!(reopened.get("cart").expect("get"), Some("saved".to_string()));
    }

    #[test]
    fn test_file_storage_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut storage = FileStorage::open(dir.path()).expect("open");

        storage.set("cart", "a").expect("set");
        storage.set("theme", "dark").expect("set");
        assert_eq!(storage.get("cart").expect("get"), Some("a".to_string()));
        assert_eq!(storage.get("theme").expect("get"), Some("dark".to_string()));
    }

    #[test]
    fn test_file_storage_tolerates_corrupt_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut storage = FileStorage::open(dir.path()).expect("open");
        fs::write(storage.path(), "not json at all").expect("corrupt");

        assert_eq!(storage.get("cart").expect("get"), None);
        // Writing over a corrupt file starts a fresh map.
        storage.set("cart", "fresh").expect("set");
        assert_eq!(storage.get("cart").expect("get"), Some("fresh".to_string()));
    }
}
