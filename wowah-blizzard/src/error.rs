//! Game Data API error types.

use std::time::Duration;
use thiserror::Error;
use wowah_fetch::{AuthError, FetchError};

/// Errors returned by [`GameDataClient`](crate::GameDataClient).
#[derive(Debug, Error)]
pub enum BlizzardError {
    /// No token could be obtained.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The API rejected the bearer token.
    #[error("API rejected the access token: {0}")]
    Unauthorized(String),

    /// The document does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("Blizzard API returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// Rate limited after exhausting retries.
    #[error("Rate limited by the Blizzard API")]
    RateLimited,

    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A configured URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl BlizzardError {
    /// Upstream HTTP status, if the failure came with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth(e) => e.status(),
            Self::Unauthorized(_) => Some(401),
            Self::NotFound(_) => Some(404),
            Self::Status { status, .. } => Some(*status),
            Self::RateLimited => Some(429),
            _ => None,
        }
    }
}

impl From<FetchError> for BlizzardError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Http(e) if e.is_timeout() => {
                BlizzardError::Http(format!("Request timed out: {e}"))
            }
            FetchError::Http(e) if e.is_connect() => {
                BlizzardError::Http(format!("Connection failed: {e}"))
            }
            FetchError::Http(e) => BlizzardError::Http(e.to_string()),
            FetchError::RateLimited { .. } => BlizzardError::RateLimited,
            FetchError::Unauthorized(body) => BlizzardError::Unauthorized(body),
            FetchError::NotFound(url) => BlizzardError::NotFound(url),
            FetchError::Status { status, body } => BlizzardError::Status { status, body },
            FetchError::Json(e) => BlizzardError::Parse(e.to_string()),
            FetchError::InvalidUrl(url) => BlizzardError::InvalidUrl(url),
        }
    }
}

impl From<serde_json::Error> for BlizzardError {
    fn from(e: serde_json::Error) -> Self {
        BlizzardError::Parse(e.to_string())
    }
}

/// Failure to obtain a single item document.
///
/// Inside a batch every variant except [`Auth`](Self::Auth) is downgraded to
/// an unresolved record.
#[derive(Debug, Error)]
pub enum ItemFetchError {
    /// No token could be obtained.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The item does not exist.
    #[error("Item {0} not found")]
    NotFound(u64),

    /// Upstream answered with a non-success status.
    #[error("Item endpoint returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The fetch did not finish in time.
    #[error("Item fetch timed out after {0:?}")]
    Timeout(Duration),

    /// The body was not valid JSON.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ItemFetchError {
    /// Maps a client error for item `id`.
    pub fn from_blizzard(id: u64, err: BlizzardError) -> Self {
        match err {
            BlizzardError::Auth(e) => Self::Auth(e),
            BlizzardError::NotFound(_) => Self::NotFound(id),
            BlizzardError::Unauthorized(body) => Self::Status { status: 401, body },
            BlizzardError::RateLimited => Self::Status {
                status: 429,
                body: String::new(),
            },
            BlizzardError::Status { status, body } => Self::Status { status, body },
            BlizzardError::Http(msg) | BlizzardError::InvalidUrl(msg) => Self::Http(msg),
            BlizzardError::Parse(msg) => Self::Parse(msg),
        }
    }

    /// The token failure, if this is one.
    pub fn as_auth(&self) -> Option<&AuthError> {
        match self {
            Self::Auth(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ItemFetchError> for BlizzardError {
    fn from(err: ItemFetchError) -> Self {
        match err {
            ItemFetchError::Auth(e) => Self::Auth(e),
            ItemFetchError::NotFound(id) => Self::NotFound(format!("item {id}")),
            ItemFetchError::Status { status, body } => Self::Status { status, body },
            ItemFetchError::Http(msg) => Self::Http(msg),
            ItemFetchError::Timeout(after) => Self::Http(format!("timed out after {after:?}")),
            ItemFetchError::Parse(msg) => Self::Parse(msg),
        }
    }
}
