//! Output format selection

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::tree::TreeEntry;

use super::json::format_json;
use super::tree::format_tree;
use super::yaml::format_yaml;

/// One of the three supported renderings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented tree text
    #[default]
    Tree,
    /// YAML-like nested list
    Yaml,
    /// Nested JSON object
    Json,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Tree => "tree",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }

    /// File extension of the output file.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Tree => "txt",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }

    pub fn render(self, root: &TreeEntry) -> Result<String> {
        match self {
            OutputFormat::Tree => format_tree(root),
            OutputFormat::Yaml => format_yaml(root),
            OutputFormat::Json => format_json(root),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tree" => Ok(OutputFormat::Tree),
            "yaml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
