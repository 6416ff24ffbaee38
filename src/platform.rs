//! Platform root model and path utilities
//!
//! Windows has no single filesystem root, so "top of the filesystem"
//! is represented by an explicit [`RootKind`] resolved once at startup
//! and threaded through path operations.

use std::path::{Path, PathBuf};

/// How the platform spells "no parent directory"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    /// Single root directory ("/")
    Rooted,
    /// Per-volume roots (drive letters); the sentinel is the empty path
    Volumes,
}

impl RootKind {
    /// Resolve the root model for the running platform
    pub fn detect() -> Self {
        if cfg!(windows) {
            RootKind::Volumes
        } else {
            RootKind::Rooted
        }
    }

    /// The root sentinel path for this platform
    pub fn sentinel(&self) -> PathBuf {
        match self {
            RootKind::Rooted => PathBuf::from("/"),
            RootKind::Volumes => PathBuf::new(),
        }
    }

    /// Check whether `path` is this platform's root sentinel
    pub fn is_sentinel(&self, path: &Path) -> bool {
        match self {
            RootKind::Rooted => path == Path::new("/"),
            RootKind::Volumes => path.as_os_str().is_empty(),
        }
    }
}

/// Validate a start path, substituting the platform root when it is
/// absent, non-existent, or not a directory
pub fn resolve(start: Option<&Path>, root: RootKind) -> PathBuf {
    match start {
        Some(path) if root.is_sentinel(path) || path.is_dir() => path.to_path_buf(),
        _ => root.sentinel(),
    }
}

/// Parent directory of `path`
///
/// Taking the parent of a volume root yields the root sentinel, never
/// the same path, so backing out of a drive lists the drives instead
/// of looping.
pub fn parent_of(path: &Path, root: RootKind) -> PathBuf {
    match path.parent() {
        Some(parent) if parent != path => parent.to_path_buf(),
        _ => root.sentinel(),
    }
}

/// Drive letters present on this machine (Volumes platforms)
pub fn volumes() -> Vec<String> {
    ('A'..='Z')
        .map(|letter| format!("{letter}:"))
        .filter(|drive| Path::new(&format!("{drive}\\")).exists())
        .collect()
}
