//! File-backed slot storage: one `<key>.json` file per slot

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use super::{validate_key, write_atomic, SnapshotStorage, StorageError};

/// Stores each slot as a JSON file inside `dir`
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStorage for JsonFileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let path = self.slot_path(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(&path, e)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let path = self.slot_path(key);
        write_atomic(&path, value.as_bytes())?;
        debug!(path = %path.display(), bytes = value.len(), "Wrote slot");
        Ok(())
    }
}
