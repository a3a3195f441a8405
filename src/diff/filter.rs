//! Exclude patterns

use crate::types::SyncError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Compiled set of exclude globs, matched against entry names
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    set: GlobSet,
}

impl ExcludeFilter {
    /// Compile `patterns`.
    ///
    /// # Errors
    /// An invalid glob is a configuration problem and returns `SyncError::ConfigParse`.
    pub fn new(patterns: &[String]) -> Result<Self, SyncError> {
        if patterns.is_empty() {
            return Ok(Self::empty());
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                SyncError::ConfigParse(format!("Invalid exclude pattern '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }

        let set = builder
            .build()
            .map_err(|e| SyncError::ConfigParse(format!("Failed to build exclude patterns: {}", e)))?;

        Ok(Self { set })
    }

    /// Filter that excludes nothing
    pub fn empty() -> Self {
        Self {
            set: GlobSet::empty(),
        }
    }

    pub fn is_excluded(&self, name: &Path) -> bool {
        self.set.is_match(name)
    }
}
