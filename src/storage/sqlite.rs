//! SQLite-backed slot storage

use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use super::{SnapshotStorage, StorageError};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS kv_slots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);
"#;

/// Slots stored as rows of a `kv_slots` table
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open or create the database at `path`
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Self::with_connection(conn)
    }

    /// Private in-memory database
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    /// Unix milliseconds of the last write to `key`
    pub fn updated_at(&self, key: &str) -> Result<Option<i64>, StorageError> {
        let ts = self
            .conn
            .query_row(
                "SELECT updated_at FROM kv_slots WHERE key = ?1",
                [key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(ts)
    }
}

impl SnapshotStorage for SqliteStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_slots WHERE key = ?1", [key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let now = Utc::now().timestamp_millis();
        self.conn.execute(
            r#"
            INSERT INTO kv_slots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3
            "#,
            (key, value, now),
        )?;
        debug!(key, bytes = value.len(), "Wrote slot row");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_upsert() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        assert_eq!(storage.read("slot").unwrap(), None);
        assert_eq!(storage.updated_at("slot").unwrap(), None);

        storage.write("slot", "one").unwrap();
        storage.write("slot", "two").unwrap();
        assert_eq!(storage.read("slot").unwrap().as_deref(), Some("two"));
        assert!(storage.updated_at("slot").unwrap().is_some());
    }

    #[test]
    fn test_persists_across_connections() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("progress.db");

        let mut storage = SqliteStorage::open(&db_path).unwrap();
        storage.write("slot", "kept").unwrap();
        drop(storage);

        let reopened = SqliteStorage::open(&db_path).unwrap();
        assert_eq!(reopened.read("slot").unwrap().as_deref(), Some("kept"));
    }
}
