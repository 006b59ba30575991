//! Durable key-value slots for gamification snapshots
//!
//! The store writes one serialized blob per slot after every mutation.
//! Backends only move strings; (de)serialization lives in the store.
//!
//! # Backends
//!
//! - [`MemoryStorage`]: process-local map, used in tests
//! - [`JsonFileStorage`]: one `<key>.json` file per slot, atomic writes
//! - [`SqliteStorage`]: a `kv_slots` table in a SQLite database

mod atomic;
mod json_file;
mod memory;
mod sqlite;

pub use atomic::write_atomic;
pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Errors raised by storage backends
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to lock {path}: {source}")]
    Lock {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid slot key: {0:?}")]
    InvalidKey(String),
}

impl StorageError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// A durable key-value slot store
pub trait SnapshotStorage {
    /// Read the value stored under `key`, `None` if the slot is empty
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot `key` with `value`
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: SnapshotStorage + ?Sized> SnapshotStorage for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

impl<S: SnapshotStorage + ?Sized> SnapshotStorage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Slot keys double as file names, so keep them to a safe charset
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
