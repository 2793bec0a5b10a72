//! Tree rendering and output
//!
//! This module turns a walked [`TreeEntry`](crate::tree::TreeEntry) into text
//! and writes it out:
//! - Indented tree text
//! - YAML-like nested list
//! - JSON object
//!
//! # Module Structure
//!
//! - `format` - Format selection and dispatch
//! - `utils` - Shape checks shared by the formatters
//! - `tree` - Indented tree formatter
//! - `yaml` - YAML-like formatter
//! - `json` - JSON formatter
//! - `writer` - Output file naming and atomic writes

mod format;
mod json;
mod tree;
mod utils;
mod writer;
mod yaml;

// Re-export public types and functions
pub use format::OutputFormat;
pub use json::format_json;
pub use tree::format_tree;
pub use writer::{OUTPUT_DIR, output_path, write_output};
pub use yaml::format_yaml;
