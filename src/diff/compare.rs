//! Watermark comparison

use super::ExcludeFilter;
use crate::config::Watermark;
use crate::scanner::ScannedEntry;
use crate::types::{FileEntry, SkipReason, SyncAction};

/// Compare a file against the watermark and determine what action is needed
///
/// Strictly later than the watermark → Copy. Equal or earlier → Skip,
/// the file is considered already synchronized.
pub fn compare_to_watermark(entry: &FileEntry, watermark: &Watermark) -> SyncAction {
    if watermark.is_exceeded_by(entry.mtime) {
        SyncAction::Copy(entry.clone())
    } else {
        SyncAction::Skip {
            name: entry.name.clone(),
            reason: SkipReason::Unchanged,
        }
    }
}

/// Decide what to do with one scanned source entry
///
/// Exclusion is checked first, then the entry kind; only regular files
/// are ever compared against the watermark.
pub fn decide(scanned: &ScannedEntry, watermark: &Watermark, filter: &ExcludeFilter) -> SyncAction {
    if filter.is_excluded(scanned.name()) {
        return SyncAction::Skip {
            name: scanned.name().to_path_buf(),
            reason: SkipReason::Excluded,
        };
    }

    match scanned {
        ScannedEntry::File(entry) => compare_to_watermark(entry, watermark),
        ScannedEntry::Directory { name } => SyncAction::Skip {
            name: name.clone(),
            reason: SkipReason::Directory,
        },
        ScannedEntry::Special { name } => SyncAction::Skip {
            name: name.clone(),
            reason: SkipReason::NotAFile,
        },
    }
}
