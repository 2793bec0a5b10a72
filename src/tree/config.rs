//! Configuration types for the tree walker

use super::filter::ExclusionSet;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Names shown as elided instead of being walked.
    pub excluded: ExclusionSet,
    /// Only elide directories. When false (the default) a file whose name
    /// is excluded is elided as well.
    pub exclude_dirs_only: bool,
}

impl WalkerConfig {
    pub fn new(excluded: ExclusionSet) -> Self {
        Self {
            excluded,
            ..Default::default()
        }
    }

    pub fn with_exclude_dirs_only(mut self, dirs_only: bool) -> Self {
        self.exclude_dirs_only = dirs_only;
        self
    }
}
