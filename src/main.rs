use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use studyquest::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "studyquest")]
#[command(about = "Gamified learning progress: XP, levels, streaks and achievements")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.studyquest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for progress data (overrides the config file)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show level, XP, streak and totals
    Status,

    /// Record a finished learning task
    Complete {
        /// Task category (concept, transcript, quiz, code_practice, interview, chat)
        #[arg(long)]
        category: Option<String>,
    },

    /// List achievements and their progress
    Achievements {
        /// Only show unlocked achievements
        #[arg(long)]
        unlocked_only: bool,
    },

    /// Write a default ~/.studyquest/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Filter used when RUST_LOG is unset
fn default_log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = default_log_level(cli.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(Commands::Init { force }) = cli.command {
        let path = cli.config.unwrap_or_else(Config::global_config_path);
        return cli::init::init_command(&path, force);
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = Some(data_dir);
    }

    match cli.command {
        Some(Commands::Complete { category }) => {
            cli::complete::complete_command(&config, category)?;
        }
        Some(Commands::Achievements { unlocked_only }) => {
            cli::achievements::achievements_command(&config, unlocked_only)?;
        }
        Some(Commands::Status) | Some(Commands::Init { .. }) | None => {
            // Default: show status
            cli::status::status_command(&config)?;
        }
    }

    Ok(())
}
