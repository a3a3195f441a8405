//! Error types for watermark-sync

use std::path::PathBuf;
use thiserror::Error;

/// Error types for sync operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file does not exist
    #[error("Configuration file '{}' not found.", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Configuration file is not a valid JSON object
    #[error("Configuration file could not be parsed: {0}")]
    ConfigParse(String),

    /// A required key is absent from the configuration file
    #[error("Key '{key}' not found in configuration file.")]
    ConfigMissingKey { key: &'static str },

    /// Source directory does not exist or is not a directory
    #[error("Source directory '{}' does not exist.", .path.display())]
    SourceNotADirectory { path: PathBuf },

    /// Watermark string does not match `YYYY-MM-DD HH:MM:SS`
    #[error("Invalid date format in last_run_time: {value}.")]
    InvalidTimestamp { value: String },

    /// Entry vanished between enumeration and metadata query
    #[error("File {} not found.", .path.display())]
    FileNotFound { path: PathBuf },
}

impl SyncError {
    /// A corrupt watermark must stop the process with a failure status.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SyncError::InvalidTimestamp { .. })
    }

    /// Check if this error comes from loading the configuration file
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SyncError::ConfigNotFound { .. }
                | SyncError::ConfigParse(_)
                | SyncError::ConfigMissingKey { .. }
        )
    }

    /// Check if this error is a run-time validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, SyncError::SourceNotADirectory { .. })
    }

    /// Process exit status for this error.
    ///
    /// Only the fatal class terminates with a non-zero status; everything
    /// else is reported and the process ends normally.
    pub fn exit_code(&self) -> i32 {
        if self.is_fatal() {
            1
        } else {
            0
        }
    }
}
