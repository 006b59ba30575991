//! Storage backend settings

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Config;
use crate::gamification::DEFAULT_SLOT_KEY;
use crate::storage::{JsonFileStorage, MemoryStorage, SnapshotStorage, SqliteStorage};

/// Which slot store backs the gamification snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// `<data_dir>/<slot_key>.json`
    #[default]
    Json,
    /// `<data_dir>/progress.db`
    Sqlite,
    /// Nothing is kept between runs
    Memory,
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for snapshot files (defaults to ~/.studyquest/data)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Name of the slot holding the snapshot
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: None,
            slot_key: default_slot_key(),
        }
    }
}

impl StorageConfig {
    /// Configured data directory, or ~/.studyquest/data
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| Config::global_config_dir().join("data"))
    }

    /// Open the configured backend
    pub fn open(&self) -> Result<Box<dyn SnapshotStorage>> {
        let data_dir = self.resolved_data_dir();
        let storage: Box<dyn SnapshotStorage> = match self.backend {
            StorageBackend::Json => Box::new(JsonFileStorage::new(data_dir)),
            StorageBackend::Sqlite => {
                let db_path = data_dir.join("progress.db");
                Box::new(SqliteStorage::open(&db_path).with_context(|| {
                    format!("Failed to open progress db: {}", db_path.display())
                })?)
            }
            StorageBackend::Memory => Box::new(MemoryStorage::new()),
        };
        tracing::debug!(backend = ?self.backend, dir = %self.resolved_data_dir().display(), "Opened storage");
        Ok(storage)
    }
}
