//! Output file naming and writing

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

use super::format::OutputFormat;

/// Directory, relative to the working directory, that receives output files.
/// It must already exist.
pub const OUTPUT_DIR: &str = "output";

/// Mode of written output files, the usual `0666 & !umask` result.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// `output/<root>-directory-structure.<ext>`
///
/// Path separators in `root_name` are replaced with `_` so the file always
/// lands directly inside [`OUTPUT_DIR`].
pub fn output_path(root_name: &str, format: OutputFormat) -> PathBuf {
    let stem: String = root_name
        .chars()
        .map(|c| if std::path::is_separator(c) { '_' } else { c })
        .collect();
    Path::new(OUTPUT_DIR).join(format!(
        "{}-directory-structure.{}",
        stem,
        format.extension()
    ))
}

/// Write `contents` to `path` atomically.
///
/// The text goes to a temp file in the destination directory which is then
/// renamed over `path`, so a failed run never leaves a partial file behind.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut file = NamedTempFile::new_in(dir).map_err(|e| Error::filesystem(dir, e))?;
    debug!(temp = %file.path().display(), "writing output");
    file.write_all(contents.as_bytes())
        .and_then(|()| file.as_file().sync_all())
        .map_err(|e| Error::filesystem(file.path(), e))?;
    // Temp files start out owner-only; give the output the mode a plain
    // create would.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(OUTPUT_MODE))
            .map_err(|e| Error::filesystem(file.path(), e))?;
    }
    file.persist(path)
        .map_err(|e| Error::filesystem(path, e.error))?;
    Ok(())
}
