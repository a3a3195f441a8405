//! FileEntry - A regular file found directly inside the source directory

use std::path::PathBuf;
use std::time::SystemTime;

/// Represents one source file for the duration of a run
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    /// File name, relative to the source directory
    pub name: PathBuf,

    /// Full source path
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,

    /// Last modification time
    pub mtime: SystemTime,
}

impl FileEntry {
    /// Create a new FileEntry with the given parameters
    pub fn new(name: PathBuf, path: PathBuf, size: u64, mtime: SystemTime) -> Self {
        Self {
            name,
            path,
            size,
            mtime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_new_file_entry() {
        let mtime = UNIX_EPOCH + Duration::from_secs(1000);
        let entry = FileEntry::new(
            PathBuf::from("file.txt"),
            PathBuf::from("/src/file.txt"),
            1024,
            mtime,
        );

        assert_eq!(entry.name, PathBuf::from("file.txt"));
        assert_eq!(entry.path, PathBuf::from("/src/file.txt"));
        assert_eq!(entry.size, 1024);
        assert_eq!(entry.mtime, mtime);
    }

    #[test]
    fn test_zero_size_file() {
        let entry = FileEntry::new(
            PathBuf::from("empty.txt"),
            PathBuf::from("/src/empty.txt"),
            0,
            UNIX_EPOCH,
        );

        assert_eq!(entry.size, 0);
    }
}
