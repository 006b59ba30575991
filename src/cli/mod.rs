//! CLI command implementations

pub mod achievements;
pub mod complete;
pub mod init;
pub mod status;

use anyhow::Result;

use studyquest::config::Config;
use studyquest::gamification::{GamificationStore, SystemClock};
use studyquest::storage::SnapshotStorage;

pub type CliStore = GamificationStore<Box<dyn SnapshotStorage>, SystemClock>;

/// Open the store configured by `config`
pub fn open_store(config: &Config) -> Result<CliStore> {
    let storage = config.storage.open()?;
    Ok(GamificationStore::open_with_key(
        storage,
        SystemClock,
        config.storage.slot_key.clone(),
    ))
}

/// Render a fixed-width progress bar for a 0.0 - 1.0 fraction
pub fn progress_bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
