//! Host UI collaborator contract
//!
//! The navigator never renders anything itself; it issues these side
//! effects and the host editor maps its own events back onto the
//! navigator's transition methods.

use std::path::Path;

/// Identifier of the host window a session is scoped to
pub type WindowId = u64;

/// Side-effecting calls the navigator issues to the host editor
pub trait Host {
    /// Display the quick panel with the given rows
    fn show_panel(&mut self, items: Vec<String>);

    /// Dismiss the quick panel if it is showing
    fn hide_panel(&mut self);

    /// Prompt for a line of text (used by the direct create commands)
    fn show_input_box(&mut self, prompt: &str, initial: &str);

    /// Open a file in the editor
    fn open_file(&mut self, path: &Path);

    /// Surface a one-line error message to the user
    fn report_error(&mut self, message: &str);
}
