//! Error taxonomy for loading inputs and evaluating checks.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, GraderError>;

#[derive(Debug)]
pub enum GraderError {
    /// An input path does not exist
    NotFound { path: PathBuf },
    /// An input path exists but could not be read
    Read { path: PathBuf, source: io::Error },
    /// The checks file is not a JSON array of strings
    Parse { path: PathBuf, message: String },
    /// The HTML could not be fetched from a URL
    Fetch { url: String, message: String },
    /// A check is not a valid CSS selector
    Selector { selector: String, message: String },
}

impl GraderError {
    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            GraderError::NotFound { .. } => "not_found",
            GraderError::Read { .. } => "read",
            GraderError::Parse { .. } => "parse",
            GraderError::Fetch { .. } => "fetch",
            GraderError::Selector { .. } => "selector",
        }
    }
}

impl fmt::Display for GraderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraderError::NotFound { path } => {
                write!(f, "{} does not exist. Exiting.", path.display())
            }
            GraderError::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            GraderError::Parse { path, message } => {
                write!(f, "Failed to parse checks from {}: {}", path.display(), message)
            }
            GraderError::Fetch { url, message } => {
                write!(f, "Failed to fetch {}: {}", url, message)
            }
            GraderError::Selector { selector, message } => {
                write!(f, "Invalid selector '{}': {}", selector, message)
            }
        }
    }
}

impl std::error::Error for GraderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraderError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
