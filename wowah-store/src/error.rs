//! Store error types.

use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// True when the error is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// A memo file exists but could not be used.
///
/// Callers treat this as a cache miss.
#[derive(Debug, Error)]
pub enum CacheReadError {
    /// The file could not be read.
    #[error("Unreadable cache file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON.
    #[error("Corrupt cache file: {0}")]
    Parse(#[from] serde_json::Error),
}
