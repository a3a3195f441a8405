//! Non-recursive directory listing

use crate::types::{FileEntry, SyncError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What a source entry turned out to be when its metadata was queried
#[derive(Debug, Clone, PartialEq)]
pub enum ScannedEntry {
    /// Regular file (or symlink to one)
    File(FileEntry),

    /// Subdirectory (or symlink to one)
    Directory { name: PathBuf },

    /// Fifo, socket, device node
    Special { name: PathBuf },
}

impl ScannedEntry {
    pub fn name(&self) -> &Path {
        match self {
            ScannedEntry::File(entry) => &entry.name,
            ScannedEntry::Directory { name } | ScannedEntry::Special { name } => name,
        }
    }
}

/// List the names of the immediate entries of `root`, sorted by name.
///
/// The filesystem gives no ordering guarantee; sorting only makes status
/// output reproducible; each entry is evaluated independently.
///
/// # Errors
/// Failure to open or read the directory is returned as `SyncError::Io`.
pub fn list_entry_names(root: &Path) -> Result<Vec<PathBuf>, SyncError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        names.push(PathBuf::from(entry.file_name()));
    }
    names.sort();

    tracing::debug!(root = %root.display(), entries = names.len(), "listed source directory");
    Ok(names)
}

/// Query metadata for `root/name`, following symlinks.
///
/// # Errors
/// * `SyncError::FileNotFound` if the entry (or a symlink's target) no longer exists
/// * `SyncError::Io` for any other metadata failure
pub fn inspect_entry(root: &Path, name: &Path) -> Result<ScannedEntry, SyncError> {
    let path = root.join(name);
    let metadata = match fs::metadata(&path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(SyncError::FileNotFound { path });
        }
        Err(e) => return Err(SyncError::Io(e)),
    };

    if metadata.is_dir() {
        return Ok(ScannedEntry::Directory {
            name: name.to_path_buf(),
        });
    }

    if !metadata.is_file() {
        return Ok(ScannedEntry::Special {
            name: name.to_path_buf(),
        });
    }

    let mtime = metadata.modified()?;
    Ok(ScannedEntry::File(FileEntry::new(
        name.to_path_buf(),
        path,
        metadata.len(),
        mtime,
    )))
}
