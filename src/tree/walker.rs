//! TreeWalker - builds the full tree in memory

use std::fs::DirEntry;
use std::path::{Component, Path};

use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::config::WalkerConfig;
use super::node::TreeEntry;

/// Depth-first, sequential walker producing a [`TreeEntry`] tree.
///
/// Within each directory the children are ordered as expanded directories,
/// then elided entries, then files. Each group keeps the name-sorted listing
/// order.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and wrap the result in a directory entry named after it.
    pub fn walk(&self, root: &Path) -> Result<TreeEntry> {
        let children = self.walk_dir(root)?;
        Ok(TreeEntry::directory(root_name(root), children))
    }

    fn walk_dir(&self, path: &Path) -> Result<Vec<TreeEntry>> {
        debug!(path = %path.display(), "walking directory");

        let entries = std::fs::read_dir(path).map_err(|e| Error::filesystem(path, e))?;
        let mut entries = entries
            .collect::<std::io::Result<Vec<DirEntry>>>()
            .map_err(|e| Error::filesystem(path, e))?;
        entries.sort_by_key(|a| a.file_name());

        let mut dirs = Vec::new();
        let mut elided = Vec::new();
        let mut files = Vec::new();

        for entry in entries {
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            // file_type() does not follow symlinks, so linked directories
            // are listed as files and never walked.
            let is_dir = entry
                .file_type()
                .map_err(|e| Error::filesystem(&entry_path, e))?
                .is_dir();

            if self.is_excluded(&name, is_dir) {
                debug!(path = %entry_path.display(), "eliding excluded entry");
                elided.push(TreeEntry::elided(name));
            } else if is_dir {
                let children = self.walk_dir(&entry_path)?;
                dirs.push(TreeEntry::directory(name, children));
            } else {
                trace!(path = %entry_path.display(), "file");
                files.push(TreeEntry::file(name));
            }
        }

        dirs.extend(elided);
        dirs.extend(files);
        Ok(dirs)
    }

    fn is_excluded(&self, name: &str, is_dir: bool) -> bool {
        if self.config.exclude_dirs_only && !is_dir {
            return false;
        }
        self.config.excluded.contains(name)
    }
}

/// Label used when the root is the filesystem root itself.
pub const FILESYSTEM_ROOT_NAME: &str = "root";

/// Last component of the requested root as written: `.` for `./`, `..` for
/// `project/..`, [`FILESYSTEM_ROOT_NAME`] for `/`.
pub fn root_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().to_string(),
        Some(Component::CurDir) | None => ".".to_string(),
        Some(Component::ParentDir) => "..".to_string(),
        Some(Component::RootDir) | Some(Component::Prefix(_)) => FILESYSTEM_ROOT_NAME.to_string(),
    }
}
