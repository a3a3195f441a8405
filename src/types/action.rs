//! SyncAction - Per-entry decisions made by the diff engine

use super::FileEntry;
use std::fmt;
use std::path::{Path, PathBuf};

/// Why an entry was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Not modified after the watermark
    Unchanged,

    /// Subdirectories are never descended into
    Directory,

    /// Matched an exclude pattern
    Excluded,

    /// Socket, fifo, device node...
    NotAFile,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkipReason::Unchanged => "not modified since the last run",
            SkipReason::Directory => "directory, not descended into",
            SkipReason::Excluded => "matches an exclude pattern",
            SkipReason::NotAFile => "not a regular file",
        };
        f.write_str(label)
    }
}

/// Sync action determined by diff engine
#[derive(Debug, Clone, PartialEq)]
pub enum SyncAction {
    /// Modified after the watermark, copy into the destination
    Copy(FileEntry),

    /// Leave the entry alone
    Skip { name: PathBuf, reason: SkipReason },
}

impl SyncAction {
    /// Entry name inside the source directory
    pub fn name(&self) -> &Path {
        match self {
            SyncAction::Copy(entry) => &entry.name,
            SyncAction::Skip { name, .. } => name,
        }
    }

    /// Short label used in status lines
    pub fn action_name(&self) -> &'static str {
        match self {
            SyncAction::Copy(_) => "Copy",
            SyncAction::Skip { .. } => "Skip",
        }
    }
}
