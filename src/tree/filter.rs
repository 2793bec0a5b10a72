//! Name-based exclusion for tree walking

use std::collections::HashSet;

/// Set of plain entry names to elide instead of walking.
///
/// Matching is exact and case-sensitive on the base name. No globbing and
/// no path-relative matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Parse the comma-separated command line form.
    ///
    /// Pieces are kept verbatim (no trimming). An empty argument means no
    /// exclusions.
    pub fn from_arg(arg: &str) -> Self {
        if arg.is_empty() {
            return Self::default();
        }
        Self::new(arg.split(','))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg_splits_on_commas() {
        let set = ExclusionSet::from_arg("node_modules,.git,target");
        assert_eq!(set.len(), 3);
        assert!(set.contains("node_modules"));
        assert!(set.contains(".git"));
        assert!(set.contains("target"));
    }

    #[test]
    fn test_from_arg_does_not_trim() {
        let set = ExclusionSet::from_arg("a, b");
        assert!(set.contains("a"));
        assert!(set.contains(" b"));
        assert!(!set.contains("b"));
    }

    #[test]
    fn test_from_arg_empty_is_empty_set() {
        assert!(ExclusionSet::from_arg("").is_empty());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let set = ExclusionSet::new(["Build"]);
        assert!(set.contains("Build"));
        assert!(!set.contains("build"));
    }

    #[test]
    fn test_matching_is_name_only() {
        let set = ExclusionSet::new(["vendor"]);
        assert!(!set.contains("src/vendor"));
        assert!(!set.contains("vendor*"));
    }
}
