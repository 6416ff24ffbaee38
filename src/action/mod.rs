//! Filesystem mutation actions

pub mod file;

pub use file::{create_file, create_folder};
