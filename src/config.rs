//! Configuration file loading and parsing

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{NavError, Result};
use crate::listing::DEFAULT_EXCLUDE;

/// Navigator settings, loaded from a TOML file the host owns
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Name patterns hidden from listings (anchored regexes)
    pub regex_exclude: Vec<String>,
    /// Show hidden files by default
    pub show_hidden: bool,
    /// Override for the `~/` shortcut target; the platform home
    /// directory when unset
    pub home: Option<PathBuf>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            regex_exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            show_hidden: false,
            home: None,
        }
    }
}

impl NavConfig {
    /// Load from a TOML file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse from TOML text
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| NavError::config(err.to_string()))
    }
}
