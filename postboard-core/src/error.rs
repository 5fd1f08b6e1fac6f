//! Structured error types for postboard-core.
//!
//! Uses `thiserror` so the server can map each variant onto a status code.
//! The binary (postboard-cli) wraps these in `anyhow` for context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure talking to the backing store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Opening, reading or appending to the posts file failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Create an I/O error tagged with the file it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Rejected submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent or empty
    #[error("Both name and content are required!")]
    MissingField { field: &'static str },
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
