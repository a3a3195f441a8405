//! Executor module for file operations

pub mod copy;

use crate::config::Watermark;
use crate::types::{SyncAction, SyncError};
use std::fs;
use std::path::{Path, PathBuf};

pub use copy::copy_file_atomic;

/// Outcome of a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of entries listed in the source directory.
    pub total_entries: usize,
    /// Files copied (or that would be copied, in a dry run).
    pub copied: usize,
    /// Entries left alone for any reason.
    pub skipped: usize,
    /// Entries that disappeared before their metadata could be read.
    pub missing: usize,
    /// Aggregate copied bytes.
    pub bytes_copied: u64,
    /// Watermark written at the end of the run.
    pub next_watermark: Watermark,
    /// True when nothing was copied or persisted.
    pub dry_run: bool,
}

impl SyncReport {
    pub fn new(total_entries: usize, next_watermark: Watermark, dry_run: bool) -> Self {
        Self {
            total_entries,
            copied: 0,
            skipped: 0,
            missing: 0,
            bytes_copied: 0,
            next_watermark,
            dry_run,
        }
    }

    /// Count an executed action
    pub fn record(&mut self, action: &SyncAction, bytes: u64) {
        match action {
            SyncAction::Copy(_) => {
                self.copied += 1;
                self.bytes_copied += bytes;
            }
            SyncAction::Skip { .. } => self.skipped += 1,
        }
    }
}

/// Events emitted while a run progresses.
#[derive(Debug)]
pub enum SyncEvent<'a> {
    /// Configuration loaded and validated, entries listed.
    Start {
        source: &'a Path,
        destination: &'a Path,
        watermark: Watermark,
        total: usize,
    },
    /// Entry handled (copied or skipped).
    Entry {
        index: usize,
        total: usize,
        action: &'a SyncAction,
    },
    /// Entry vanished between listing and metadata query; the run continues.
    Missing {
        index: usize,
        total: usize,
        path: &'a Path,
    },
    /// Run completed.
    Complete { report: &'a SyncReport },
}

/// Optional callback used to receive run events.
pub type SyncCallback<'c> = dyn for<'e> Fn(&SyncEvent<'e>) + 'c;

/// Carry out one action against `destination`.
///
/// The destination directory is created on first copy when missing.
/// Returns the number of bytes written.
pub fn execute_action(action: &SyncAction, destination: &Path) -> Result<u64, SyncError> {
    match action {
        SyncAction::Copy(entry) => {
            fs::create_dir_all(destination)?;
            let dest_path = destination_path(destination, &entry.name);
            let bytes = copy_file_atomic(&entry.path, &dest_path)?;
            tracing::debug!(
                src = %entry.path.display(),
                dest = %dest_path.display(),
                bytes,
                "copied"
            );
            Ok(bytes)
        }
        SyncAction::Skip { .. } => Ok(0),
    }
}

/// Copies land directly in the destination directory, keeping the file name.
pub fn destination_path(destination: &Path, name: &Path) -> PathBuf {
    destination.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileEntry, SkipReason};
    use std::time::UNIX_EPOCH;
    use tempfile::TempDir;

    fn watermark() -> Watermark {
        Watermark::parse("2024-01-01 00:00:00").unwrap()
    }

    #[test]
    fn test_report_counts_actions() {
        let mut report = SyncReport::new(3, watermark(), false);
        let entry = FileEntry::new(
            PathBuf::from("a.txt"),
            PathBuf::from("/src/a.txt"),
            42,
            UNIX_EPOCH,
        );

        report.record(&SyncAction::Copy(entry), 42);
        report.record(
            &SyncAction::Skip {
                name: PathBuf::from("b.txt"),
                reason: SkipReason::Unchanged,
            },
            0,
        );

        assert_eq!(report.copied, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.bytes_copied, 42);
        assert_eq!(report.missing, 0);
    }

    #[test]
    fn test_execute_copy_creates_destination() {
        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");
        let src_path = src.path().join("a.txt");
        fs::write(&src_path, b"payload").unwrap();
        let destination = dst.path().join("not-yet-created");

        let action = SyncAction::Copy(FileEntry::new(
            PathBuf::from("a.txt"),
            src_path,
            7,
            UNIX_EPOCH,
        ));
        let bytes = execute_action(&action, &destination).expect("copy should succeed");

        assert_eq!(bytes, 7);
        assert_eq!(fs::read(destination.join("a.txt")).unwrap(), b"payload");
    }

    #[test]
    fn test_execute_skip_touches_nothing() {
        let dst = TempDir::new().expect("create dst tempdir");
        let destination = dst.path().join("untouched");
        let action = SyncAction::Skip {
            name: PathBuf::from("b.txt"),
            reason: SkipReason::Unchanged,
        };

        assert_eq!(execute_action(&action, &destination).unwrap(), 0);
        assert!(!destination.exists());
    }
}
