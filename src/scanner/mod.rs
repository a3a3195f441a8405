//! Source directory scanning
//!
//! Only the immediate children of the source directory are considered.
//! Names are listed up front; metadata is queried per entry while the run
//! walks the list, so an entry removed mid-run surfaces as
//! [`SyncError::FileNotFound`](crate::types::SyncError::FileNotFound) for that entry alone.

mod listing;

pub use listing::{inspect_entry, list_entry_names, ScannedEntry};

