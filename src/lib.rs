//! Dirmap - dump a directory tree as tree text, YAML-like text, or JSON

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{OutputFormat, format_json, format_tree, format_yaml, output_path, write_output};
pub use tree::{EntryKind, ExclusionSet, TreeEntry, TreeStats, TreeWalker, WalkerConfig};
