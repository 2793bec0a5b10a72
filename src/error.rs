//! Error types for walking and rendering

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a run.
#[derive(Debug, Error)]
pub enum Error {
    /// No target directory was given on the command line.
    #[error("no target directory given")]
    MissingArgument,

    /// The target directory does not exist.
    #[error("target directory not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// The format argument is not one of `tree`, `yaml` or `json`.
    #[error("unsupported output format: {format} (expected tree, yaml or json)")]
    UnsupportedFormat { format: String },

    /// Listing a directory or writing the output failed.
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A renderer was handed an entry it cannot lay out.
    #[error("malformed tree shape: {reason}")]
    MalformedTreeShape { reason: String },
}

impl Error {
    /// Create a filesystem error with path context.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-shape error with a reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedTreeShape {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
