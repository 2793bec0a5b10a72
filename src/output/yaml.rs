//! YAML-like text
//!
//! Not a YAML serializer: names are written verbatim and never quoted, so
//! the output is meant for reading rather than for a YAML parser.

use crate::error::Result;
use crate::tree::TreeEntry;

use super::utils::{ROOT_INDENT, Shape, root_block, shape};

/// Render `root` as a YAML-like nested list.
pub fn format_yaml(root: &TreeEntry) -> Result<String> {
    let children = root_block(root)?;
    let mut output = String::new();
    output.push_str(&root.name);
    output.push_str(":\n");
    format_items(children, ROOT_INDENT, &mut output)?;
    Ok(output)
}

fn format_items(entries: &[TreeEntry], indent: &str, output: &mut String) -> Result<()> {
    for entry in entries {
        let shape = shape(entry)?;
        output.push_str(indent);
        output.push_str("- ");
        output.push_str(&entry.name);
        match shape {
            Shape::File => output.push('\n'),
            Shape::Elided => output.push_str(": ...omitted\n"),
            Shape::Block(children) => {
                output.push_str(":\n");
                format_items(children, &format!("{}  ", indent), output)?;
            }
        }
    }
    Ok(())
}
