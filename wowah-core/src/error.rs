//! Core error types for `wowah`.

use thiserror::Error;

/// Core error type for `wowah` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Unknown region code.
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid data from an API response.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
