//! Directory listing - entries, exclusion policy, and the lister

pub mod entry;
pub mod lister;
pub mod policy;

pub use entry::Entry;
pub use lister::list;
pub use policy::{ExclusionPolicy, DEFAULT_EXCLUDE};
