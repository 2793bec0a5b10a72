//! Directory tree walking logic
//!
//! `TreeWalker` lists a directory recursively and builds an owned
//! [`TreeEntry`] tree. Excluded names become elided entries whose contents
//! are never read.

mod config;
mod filter;
mod node;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use filter::ExclusionSet;
pub use node::{EntryKind, TreeEntry, TreeStats};
pub use walker::{TreeWalker, root_name};
