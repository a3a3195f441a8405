//! Configuration management
//!
//! The configuration file doubles as the run state: besides the two
//! directories it carries the `last_run_time` watermark that every
//! successful run advances.

mod cli;
mod watermark;

pub use cli::{Cli, SyncOptions};
pub use watermark::{Watermark, WATERMARK_FORMAT};

use crate::executor::copy::parent_dir;
use crate::types::SyncError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Keys that must be present, checked in this order
pub const REQUIRED_KEYS: [&str; 3] = ["source_directory", "destination_directory", "last_run_time"];

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Persisted sync configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory whose immediate files are mirrored
    pub source_directory: PathBuf,

    /// Directory receiving the copies
    pub destination_directory: PathBuf,

    /// Watermark string, `YYYY-MM-DD HH:MM:SS`
    pub last_run_time: String,

    /// Glob patterns matched against entry names; matches are never copied
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_patterns: Vec<String>,

    /// Write the configuration after every entry instead of once at the end
    #[serde(default, skip_serializing_if = "is_false")]
    pub persist_each_entry: bool,

    /// Keys this tool does not know about, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Config {
    /// Create a configuration with no optional settings
    pub fn new(
        source_directory: impl Into<PathBuf>,
        destination_directory: impl Into<PathBuf>,
        last_run_time: Watermark,
    ) -> Self {
        Self {
            source_directory: source_directory.into(),
            destination_directory: destination_directory.into(),
            last_run_time: last_run_time.to_string(),
            exclude_patterns: Vec::new(),
            persist_each_entry: false,
            extra: Map::new(),
        }
    }

    /// Load and validate the configuration file at `path`.
    ///
    /// A leading byte-order mark is tolerated. `last_run_time` is only
    /// checked for presence here; see [`Config::watermark`] for parsing.
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        if !path.exists() {
            return Err(SyncError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| SyncError::ConfigParse(format!("not valid UTF-8: {}", e)))?;
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&text);

        let value: Value =
            serde_json::from_str(text).map_err(|e| SyncError::ConfigParse(e.to_string()))?;
        Self::from_value(value)
    }

    /// Build a configuration from already-parsed JSON.
    pub fn from_value(value: Value) -> Result<Self, SyncError> {
        let object = match value.as_object() {
            Some(object) => object,
            None => {
                return Err(SyncError::ConfigParse(
                    "expected a JSON object at the top level".to_string(),
                ))
            }
        };

        if let Some(key) = REQUIRED_KEYS.iter().find(|key| !object.contains_key(**key)) {
            return Err(SyncError::ConfigMissingKey { key: *key });
        }

        serde_json::from_value(value).map_err(|e| SyncError::ConfigParse(e.to_string()))
    }

    /// Write the configuration to `path`, replacing any existing file.
    ///
    /// Written to a uniquely named temporary file in the same directory and
    /// renamed over `path`, so a crash never leaves a truncated
    /// configuration behind. An existing file keeps its permissions.
    pub fn save(&self, path: &Path) -> Result<(), SyncError> {
        let rendered = self.to_pretty_json()?;

        let mut temp = NamedTempFile::new_in(parent_dir(path))?;
        temp.write_all(rendered.as_bytes())?;
        temp.as_file().sync_all()?;

        if let Ok(existing) = fs::metadata(path) {
            fs::set_permissions(temp.path(), existing.permissions())?;
        }

        temp.persist(path).map_err(|e| e.error)?;
        tracing::info!(path = %path.display(), last_run_time = %self.last_run_time, "configuration saved");
        Ok(())
    }

    /// Render as 4-space indented JSON with a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, SyncError> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)
            .map_err(|e| SyncError::Io(std::io::Error::other(e)))?;
        buffer.push(b'\n');

        String::from_utf8(buffer).map_err(|e| SyncError::Io(std::io::Error::other(e)))
    }

    /// Parse the persisted watermark.
    pub fn watermark(&self) -> Result<Watermark, SyncError> {
        Watermark::parse(&self.last_run_time)
    }

    /// Copy of this configuration with the watermark replaced
    pub fn with_watermark(&self, watermark: Watermark) -> Self {
        Self {
            last_run_time: watermark.to_string(),
            ..self.clone()
        }
    }

    /// Validate run-time preconditions
    pub fn validate(&self) -> Result<(), SyncError> {
        if !self.source_directory.is_dir() {
            return Err(SyncError::SourceNotADirectory {
                path: self.source_directory.clone(),
            });
        }

        Ok(())
    }
}
