//! FuzzyNav - host-agnostic navigation core for editor quick-open panels
//!
//! Implements the state machine behind a "fuzzy" file navigator: walk
//! the filesystem from a quick panel, type partial paths to jump
//! (home, root, nested paths), and create files or folders inline.
//! The host editor supplies rendering and event delivery through the
//! [`Host`] trait; this crate supplies listing and session logic.

pub mod action;
pub mod config;
pub mod error;
pub mod host;
pub mod listing;
pub mod nav;
pub mod platform;

pub use config::NavConfig;
pub use error::{NavError, Result};
pub use host::{Host, WindowId};
pub use listing::{list, Entry, ExclusionPolicy};
pub use nav::{Navigator, OpenRequest, Session, TextIntent};
pub use platform::RootKind;
