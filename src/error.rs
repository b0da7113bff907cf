//! Error types for the Sibyl library.
//!
//! All fallible operations return [`Result`], which carries a [`SibylError`].
//! The suggestion core itself (distance, ranking, the controller state
//! machine) has no error states; errors only arise at the boundaries
//! (dictionary loading, output encoding, background execution).

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Sibyl operations.
#[derive(Error, Debug)]
pub enum SibylError {
    /// I/O errors (dictionary file operations, terminal output, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SibylError.
pub type Result<T> = std::result::Result<T, SibylError>;

impl SibylError {
    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        SibylError::Other(format!("Internal error: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SibylError::Other(msg.into())
    }
}
