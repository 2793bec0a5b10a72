//! JSON output formatting

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::tree::TreeEntry;

use super::utils::{Shape, root_block, shape};

/// Render `root` as a pretty-printed JSON object.
///
/// Every entry becomes a key. Directories map to nested objects; files and
/// elided directories both map to `null`. Later duplicate names overwrite
/// earlier ones in place. No trailing newline.
pub fn format_json(root: &TreeEntry) -> Result<String> {
    let mut top = Map::new();
    top.insert(root.name.clone(), Value::Object(to_map(root_block(root)?)?));
    serde_json::to_string_pretty(&Value::Object(top)).map_err(|e| Error::malformed(e.to_string()))
}

fn to_map(entries: &[TreeEntry]) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    for entry in entries {
        let value = match shape(entry)? {
            Shape::File | Shape::Elided => Value::Null,
            Shape::Block(children) => Value::Object(to_map(children)?),
        };
        map.insert(entry.name.clone(), value);
    }
    Ok(map)
}
