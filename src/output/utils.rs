//! Shared helpers for the formatters

use crate::error::{Error, Result};
use crate::tree::{EntryKind, TreeEntry};

/// Indent of the root's children in the tree and YAML-like layouts.
pub const ROOT_INDENT: &str = "  ";

/// How a formatter should lay out one entry.
#[derive(Debug)]
pub enum Shape<'a> {
    File,
    Elided,
    Block(&'a [TreeEntry]),
}

/// Classify an entry, rejecting ones whose kind and children disagree.
pub fn shape(entry: &TreeEntry) -> Result<Shape<'_>> {
    if entry.name.is_empty() {
        return Err(Error::malformed("entry with an empty name"));
    }
    match (entry.kind, entry.children.as_deref()) {
        (EntryKind::File, None) => Ok(Shape::File),
        (EntryKind::ElidedDirectory, None) => Ok(Shape::Elided),
        (EntryKind::ExpandedDirectory, Some(children)) => Ok(Shape::Block(children)),
        (EntryKind::ExpandedDirectory, None) => Err(Error::malformed(format!(
            "directory '{}' has no children list",
            entry.name
        ))),
        (kind, Some(_)) => Err(Error::malformed(format!(
            "{:?} '{}' carries children",
            kind, entry.name
        ))),
    }
}

/// Children of the labeled root. The root must be an expanded directory.
pub fn root_block(root: &TreeEntry) -> Result<&[TreeEntry]> {
    match shape(root)? {
        Shape::Block(children) => Ok(children),
        _ => Err(Error::malformed(format!(
            "root '{}' is not an expanded directory",
            root.name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_accepts_constructed_entries() {
        assert!(matches!(shape(&TreeEntry::file("a")), Ok(Shape::File)));
        assert!(matches!(shape(&TreeEntry::elided("b")), Ok(Shape::Elided)));
        assert!(matches!(
            shape(&TreeEntry::directory("c", vec![])),
            Ok(Shape::Block(children)) if children.is_empty()
        ));
    }

    #[test]
    fn test_shape_rejects_file_with_children() {
        let mut entry = TreeEntry::file("a.txt");
        entry.children = Some(vec![]);
        assert!(matches!(
            shape(&entry),
            Err(Error::MalformedTreeShape { .. })
        ));
    }

    #[test]
    fn test_shape_rejects_directory_without_children() {
        let mut entry = TreeEntry::directory("src", vec![]);
        entry.children = None;
        assert!(matches!(
            shape(&entry),
            Err(Error::MalformedTreeShape { .. })
        ));
    }

    #[test]
    fn test_shape_rejects_empty_name() {
        assert!(matches!(
            shape(&TreeEntry::file("")),
            Err(Error::MalformedTreeShape { .. })
        ));
    }

    #[test]
    fn test_root_block_requires_directory() {
        assert!(root_block(&TreeEntry::directory("root", vec![])).is_ok());
        assert!(matches!(
            root_block(&TreeEntry::file("root")),
            Err(Error::MalformedTreeShape { .. })
        ));
        assert!(matches!(
            root_block(&TreeEntry::elided("root")),
            Err(Error::MalformedTreeShape { .. })
        ));
    }
}
