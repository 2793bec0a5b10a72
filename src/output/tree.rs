//! Indented tree text
//!
//! The root is written as a labeled block (`name:`); everything under it is
//! written as `├── ` branch lines, nesting by one `│   ` unit per level.

use crate::error::Result;
use crate::tree::TreeEntry;

use super::utils::{ROOT_INDENT, Shape, root_block, shape};

const BRANCH: &str = "├── ";
const NEST: &str = "│   ";
const OMITTED: &str = " (...omitted)";

/// Render `root` as indented tree text.
pub fn format_tree(root: &TreeEntry) -> Result<String> {
    let children = root_block(root)?;
    let mut output = String::new();
    output.push_str(&root.name);
    output.push_str(":\n");
    format_branches(children, ROOT_INDENT, &mut output)?;
    Ok(output)
}

fn format_branches(entries: &[TreeEntry], indent: &str, output: &mut String) -> Result<()> {
    for entry in entries {
        let shape = shape(entry)?;
        output.push_str(indent);
        output.push_str(BRANCH);
        output.push_str(&entry.name);
        match shape {
            Shape::File => output.push('\n'),
            Shape::Elided => {
                output.push_str(OMITTED);
                output.push('\n');
            }
            Shape::Block(children) => {
                output.push('\n');
                format_branches(children, &format!("{}{}", indent, NEST), output)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample_tree() -> TreeEntry {
        TreeEntry::directory(
            "project",
            vec![
                TreeEntry::directory(
                    "src",
                    vec![
                        TreeEntry::directory("bin", vec![TreeEntry::file("cli.rs")]),
                        TreeEntry::file("lib.rs"),
                    ],
                ),
                TreeEntry::directory("empty", vec![]),
                TreeEntry::elided("node_modules"),
                TreeEntry::file("Cargo.toml"),
            ],
        )
    }

    #[test]
    fn test_format_full_layout() {
        let expected = "\
project:
  ├── src
  │   ├── bin
  │   │   ├── cli.rs
  │   ├── lib.rs
  ├── empty
  ├── node_modules (...omitted)
  ├── Cargo.toml
";
        assert_eq!(format_tree(&sample_tree()).unwrap(), expected);
    }

    #[test]
    fn test_empty_root_is_label_only() {
        let root = TreeEntry::directory("empty", vec![]);
        assert_eq!(format_tree(&root).unwrap(), "empty:\n");
    }

    #[test]
    fn test_elided_has_no_nested_block() {
        let output = format_tree(&sample_tree()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        let idx = lines
            .iter()
            .position(|l| l.ends_with("├── node_modules (...omitted)"))
            .expect("elided line missing");
        assert_eq!(lines[idx + 1], "  ├── Cargo.toml");
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let tree = sample_tree();
        assert_eq!(format_tree(&tree).unwrap(), format_tree(&tree).unwrap());
    }

    #[test]
    fn test_malformed_child_fails() {
        let mut bad = TreeEntry::directory("dir", vec![]);
        bad.children = None;
        let root = TreeEntry::directory("root", vec![bad]);
        assert!(matches!(
            format_tree(&root),
            Err(Error::MalformedTreeShape { .. })
        ));
    }
}
