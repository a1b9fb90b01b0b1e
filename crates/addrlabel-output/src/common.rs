//! Shared helpers for output writers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Ensure the parent directory of a file exists.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))?;
    }
    Ok(())
}

/// Ensure an output subdirectory exists and return its path.
pub fn ensure_output_dir(base_dir: &Path, name: &str) -> Result<PathBuf> {
    let dir = base_dir.join(name);
    fs::create_dir_all(&dir).map_err(|e| OutputError::io(&dir, e))?;
    Ok(dir)
}

/// Write bytes to `path`, creating parent directories.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, bytes).map_err(|e| OutputError::io(path, e))
}
