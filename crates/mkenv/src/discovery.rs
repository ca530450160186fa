//! Discovery of Python source files under a project root.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use log::{debug, warn};
use walkdir::WalkDir;

/// Recursively collect every `.py` file under `root`, in traversal order.
///
/// The root path is validated before any traversal begins: a missing path or
/// a non-directory is fatal. Entries that cannot be walked (permissions,
/// dangling links) are reported and skipped; symlink handling otherwise
/// inherits the host filesystem walk semantics.
pub fn find_python_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!("directory {} does not exist", root.display());
    }
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == "py")
                {
                    files.push(entry.into_path());
                }
            }
            Err(err) => warn!("cannot walk directory entry: {err}"),
        }
    }
    debug!("found {} Python files under {}", files.len(), root.display());
    Ok(files)
}
