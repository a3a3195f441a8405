//! Core type definitions for watermark-sync

mod action;
mod entry;
mod error;

pub use action::{SkipReason, SyncAction};
pub use entry::FileEntry;
pub use error::SyncError;
