//! Error types for the diff engine
//!
//! The comparison itself is total: chunking, matching, alignment and word
//! diffing never fail. Errors only arise when loading caller-supplied
//! configuration or expand/collapse state.

use thiserror::Error;

/// Result type alias for fallible configuration and state loading
pub type DiffResult<T> = Result<T, DiffError>;

/// Error types for configuration and caller state
#[derive(Debug, Error)]
pub enum DiffError {
    /// Configuration value out of range
    #[error("Invalid diff configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<anyhow::Error> for DiffError {
    fn from(error: anyhow::Error) -> Self {
        DiffError::InvalidConfig(error.to_string())
    }
}
