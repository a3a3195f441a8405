//! # watermark-sync - Incremental file mirroring
//!
//! Copies the files of a source directory that changed since the last
//! recorded run into a destination directory, then advances the recorded
//! run time. Intended to be invoked periodically by a scheduler.

pub mod commands;
pub mod config;
pub mod diff;
pub mod executor;
pub mod logging;
pub mod scanner;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::{Config, SyncOptions, Watermark};
pub use executor::SyncReport;
pub use types::{FileEntry, SkipReason, SyncAction, SyncError};
