//! Error types for psp-io

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading samples
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to open {}: {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Read(#[from] std::io::Error),
}

impl IoError {
    /// Whether the error only means the file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, IoError::NotFound(_))
    }
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
