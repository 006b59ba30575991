//! Configuration loading and management

mod io;
mod storage;

pub use storage::{StorageBackend, StorageConfig};

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where progress snapshots are kept
    #[serde(default)]
    pub storage: StorageConfig,
}
