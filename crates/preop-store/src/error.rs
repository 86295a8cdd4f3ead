//! Error types for state persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing the state file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// State file could not be written.
    #[error("failed to write state file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// State could not be serialized.
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
