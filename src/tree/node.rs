//! In-memory tree produced by the walker and consumed by the formatters

/// What a tree entry stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    /// A directory whose contents were walked.
    ExpandedDirectory,
    /// An excluded directory, shown but never walked.
    ElidedDirectory,
}

/// One file or directory in the walked tree.
///
/// `children` is `Some` exactly when `kind` is `ExpandedDirectory`. The
/// constructors uphold this; formatters re-check it and reject entries built
/// by hand that do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub kind: EntryKind,
    pub children: Option<Vec<TreeEntry>>,
}

impl TreeEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            children: None,
        }
    }

    pub fn elided(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::ElidedDirectory,
            children: None,
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<TreeEntry>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::ExpandedDirectory,
            children: Some(children),
        }
    }

    /// Count entries below this one (the entry itself is not counted).
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        for child in self.children.iter().flatten() {
            match child.kind {
                EntryKind::File => stats.files += 1,
                EntryKind::ElidedDirectory => stats.elided += 1,
                EntryKind::ExpandedDirectory => {
                    stats.directories += 1;
                    stats += child.stats();
                }
            }
        }
        stats
    }
}

/// Entry counts for a walked tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    pub elided: usize,
}

impl std::ops::AddAssign for TreeStats {
    fn add_assign(&mut self, other: Self) {
        self.directories += other.directories;
        self.files += other.files;
        self.elided += other.elided;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_children_by_kind() {
        assert_eq!(TreeEntry::file("a.txt").children, None);
        assert_eq!(TreeEntry::elided("node_modules").children, None);
        assert_eq!(TreeEntry::directory("src", vec![]).children, Some(vec![]));
    }

    #[test]
    fn test_stats_counts_nested_entries() {
        let root = TreeEntry::directory(
            "root",
            vec![
                TreeEntry::directory(
                    "src",
                    vec![TreeEntry::file("main.rs"), TreeEntry::file("lib.rs")],
                ),
                TreeEntry::directory("empty", vec![]),
                TreeEntry::elided("target"),
                TreeEntry::file("Cargo.toml"),
            ],
        );
        assert_eq!(
            root.stats(),
            TreeStats {
                directories: 2,
                files: 3,
                elided: 1,
            }
        );
    }
}
