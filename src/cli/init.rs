//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use studyquest::config::Config;

/// Write a default configuration file
pub fn init_command(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default().save_to_file(path)?;
    info!(path = %path.display(), "Created config file");
    println!("Created {}", path.display());

    Ok(())
}
