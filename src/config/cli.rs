//! Command-line arguments

use super::DEFAULT_CONFIG_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Copy files modified since the last run from a source to a destination directory
#[derive(Parser, Debug)]
#[command(name = "watermark-sync", version, about)]
pub struct Cli {
    /// Configuration file holding the directories and the last-run watermark
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Report what would be copied without copying or advancing the watermark
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Options for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Configuration file to load and update
    pub config_path: PathBuf,

    /// Dry run (show decisions, don't execute)
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            dry_run: false,
        }
    }
}

impl From<&Cli> for SyncOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            dry_run: cli.dry_run,
        }
    }
}
