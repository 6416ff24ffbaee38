//! File and folder creation

use std::path::{Path, PathBuf};

/// Create an empty file at `dir/name`
///
/// Fails if `dir` does not exist or the target already does.
pub fn create_file(dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
    let path = creation_target(dir, name)?;
    std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)?;
    Ok(path)
}

/// Create a folder at `dir/name`, including intermediate segments
///
/// Fails if `dir` does not exist or the target already does.
pub fn create_folder(dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
    let path = creation_target(dir, name)?;
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// Check creation preconditions and build the target path
fn creation_target(dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
    anyhow::ensure!(dir.exists(), "{} does not exist", dir.display());
    let path = dir.join(name);
    anyhow::ensure!(!path.exists(), "{} already exists", path.display());
    Ok(path)
}
