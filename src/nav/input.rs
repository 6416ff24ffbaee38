//! Interpretation of quick-panel text input
//!
//! A text-box change is either a navigation shortcut or plain filter
//! text. Rules are checked in order; the first match wins.

use std::path::is_separator;

/// What a text-box change asks the navigator to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextIntent {
    /// Leading `~/`: jump to the home directory
    GoHome,
    /// Leading separator: jump to the filesystem root
    GoRoot,
    /// Trailing separator: descend into the typed relative path
    Descend(String),
    /// Anything else: keep filtering in place (drives the create
    /// offer when the text names a non-existent child)
    Filter(String),
}

/// Classify `text`
pub fn interpret(text: &str) -> TextIntent {
    let mut chars = text.chars();
    let first = chars.next();

    if first == Some('~') && chars.next().is_some_and(is_separator) {
        return TextIntent::GoHome;
    }
    if first.is_some_and(is_separator) {
        return TextIntent::GoRoot;
    }
    // The caret sits at the end of the box, so a trailing separator
    // means the user just finished typing a path component
    if text.chars().next_back().is_some_and(is_separator) {
        return TextIntent::Descend(text.to_string());
    }
    TextIntent::Filter(text.to_string())
}
