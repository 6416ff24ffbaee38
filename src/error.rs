//! Unified error types for FuzzyNav
//!
//! Provides a consistent error handling approach across all modules.

use std::path::PathBuf;

/// Unified error type for FuzzyNav operations
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path unreadable, vanished, or permission-denied
    #[error("{} is not accessible!", .path.display())]
    Access { path: PathBuf },

    /// Creation target already exists or creation failed
    #[error("Could not create {}!", .path.display())]
    Create { path: PathBuf },

    /// Malformed exclusion pattern (rejected at configuration time)
    #[error("Invalid exclusion pattern `{pattern}`: {reason}")]
    Pattern { pattern: String, reason: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience Result type using NavError
pub type Result<T> = std::result::Result<T, NavError>;

impl NavError {
    /// Create an Access error
    pub fn access(path: impl Into<PathBuf>) -> Self {
        Self::Access { path: path.into() }
    }

    /// Create a Create error
    pub fn create(path: impl Into<PathBuf>) -> Self {
        Self::Create { path: path.into() }
    }

    /// Create a Pattern error
    pub fn pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NavError::access("/foo/bar");
        assert_eq!(format!("{}", err), "/foo/bar is not accessible!");

        let err = NavError::create("/foo/new.txt");
        assert_eq!(format!("{}", err), "Could not create /foo/new.txt!");

        let err = NavError::pattern("[", "unclosed character class");
        assert_eq!(
            format!("{}", err),
            "Invalid exclusion pattern `[`: unclosed character class"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NavError = io_err.into();
        assert!(matches!(err, NavError::Io(_)));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
