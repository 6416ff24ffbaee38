//! Name exclusion policy

use regex::Regex;

use crate::error::{NavError, Result};

/// Default exclusion set: hide dotfiles
pub const DEFAULT_EXCLUDE: &[&str] = &[r"\.[\w]+"];

/// Ordered set of name patterns a listing omits
///
/// Patterns are matched anchored at the start of the bare entry name.
/// The empty policy excludes nothing ("show hidden" mode).
#[derive(Debug, Clone, Default)]
pub struct ExclusionPolicy {
    patterns: Vec<Regex>,
}

impl ExclusionPolicy {
    /// Compile a pattern set; malformed patterns fail fast here so a
    /// bad configuration never reaches a live session
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = Regex::new(&format!("^(?:{pattern})"))
                .map_err(|err| NavError::pattern(pattern, err.to_string()))?;
            compiled.push(regex);
        }
        Ok(Self { patterns: compiled })
    }

    /// The policy that excludes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no patterns are configured
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if any pattern matches the start of `name`
    pub fn excludes(&self, name: &str) -> bool {
        self.patterns.iter().any(|regex| regex.is_match(name))
    }
}
