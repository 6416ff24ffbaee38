//! Live navigation session state

use std::path::PathBuf;

use crate::host::WindowId;
use crate::listing::{Entry, ExclusionPolicy};

/// State of the single live navigation session
///
/// At most one exists at a time: the [`Navigator`] owns the only slot
/// and is the only way to activate one. Destroyed on file open,
/// explicit cancel, or focus loss to another window.
///
/// [`Navigator`]: crate::nav::Navigator
#[derive(Debug)]
pub struct Session {
    /// Directory currently listed
    pub cwd: PathBuf,
    /// Name patterns omitted from listings
    pub policy: ExclusionPolicy,
    /// Text typed since the last listing
    pub pending: String,
    /// True while a programmatic reopen is in flight; the matching
    /// panel dismissal consumes it instead of closing the session
    pub reload_requested: bool,
    /// Entries shown by the last listing
    pub listing: Vec<Entry>,
    /// Window this session is scoped to
    pub owner_window: WindowId,
}
