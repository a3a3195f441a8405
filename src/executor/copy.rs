//! Atomic file copy implementation

use crate::types::SyncError;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const COPY_BUFFER_SIZE: usize = 128 * 1024;

/// Copy a file atomically using the write-then-rename strategy
///
/// 1. Stream into a uniquely named temporary file next to `dest`
/// 2. Flush and sync to disk
/// 3. Preserve metadata (permissions, mtime)
/// 4. Rename onto the final destination
///
/// An existing destination file is replaced. Nothing else in the
/// destination directory is touched, and a failed copy removes its
/// temporary file.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(SyncError)` - IO error or other failure
///
/// # Example
/// ```no_run
/// use watermark_sync::executor::copy_file_atomic;
/// use std::path::Path;
///
/// let bytes = copy_file_atomic(Path::new("source.txt"), Path::new("dest.txt"))?;
/// # Ok::<(), watermark_sync::types::SyncError>(())
/// ```
pub fn copy_file_atomic(src: &Path, dest: &Path) -> Result<u64, SyncError> {
    let mut src_file = File::open(src)?;
    let mut temp = NamedTempFile::new_in(parent_dir(dest))?;

    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }

        temp.write_all(&buffer[..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    temp.as_file().sync_all()?;

    let src_metadata = src_file.metadata()?;
    fs::set_permissions(temp.path(), src_metadata.permissions())?;

    let mtime = filetime::FileTime::from_last_modification_time(&src_metadata);
    filetime::set_file_mtime(temp.path(), mtime)?;

    // This is atomic on POSIX systems (single syscall)
    temp.persist(dest).map_err(|e| e.error)?;

    Ok(total_bytes)
}

/// Directory the temporary file must live in so the final rename stays on
/// one filesystem
pub(crate) fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
