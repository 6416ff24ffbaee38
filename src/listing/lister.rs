//! Directory lister
//!
//! Pure function of filesystem state at call time; a listing may race
//! with concurrent mutation, which is accepted rather than guarded.

use std::path::Path;

use crate::error::{NavError, Result};
use crate::platform::{self, RootKind};

use super::{Entry, ExclusionPolicy};

/// List `dir` as ordered panel entries
///
/// The result is always `[Parent]` followed by folders and then files,
/// each group sorted independently in ordinal ascending order. Names
/// matching any policy pattern are omitted. At the root sentinel of a
/// volume platform the "children" are the available drives.
pub fn list(dir: &Path, policy: &ExclusionPolicy, root: RootKind) -> Result<Vec<Entry>> {
    if root == RootKind::Volumes && root.is_sentinel(dir) {
        let mut entries = vec![Entry::Parent];
        entries.extend(platform::volumes().into_iter().map(Entry::Folder));
        return Ok(entries);
    }

    let children = std::fs::read_dir(dir).map_err(|_| NavError::access(dir))?;

    let mut folders = Vec::new();
    let mut files = Vec::new();
    for child in children {
        let child = child.map_err(|_| NavError::access(dir))?;
        let name = child.file_name().to_string_lossy().into_owned();
        if policy.excludes(&name) {
            continue;
        }
        if child.path().is_dir() {
            folders.push(name);
        } else {
            files.push(name);
        }
    }

    folders.sort_unstable();
    files.sort_unstable();

    let mut entries = Vec::with_capacity(folders.len() + files.len() + 1);
    entries.push(Entry::Parent);
    entries.extend(folders.into_iter().map(Entry::Folder));
    entries.extend(files.into_iter().map(Entry::File));
    Ok(entries)
}
