//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;
use wowah_blizzard::{BlizzardError, ItemFetchError};
use wowah_fetch::AuthError;

/// Error returned by API handlers, rendered as `{ "error": message }`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request input.
    #[error("{0}")]
    BadRequest(String),

    /// No access token could be obtained.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The upstream document does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The upstream API failed.
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Status code of this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<BlizzardError> for ApiError {
    fn from(err: BlizzardError) -> Self {
        match err {
            BlizzardError::Auth(e) => Self::Auth(e),
            BlizzardError::NotFound(_) => Self::NotFound(err.to_string()),
            other => Self::Upstream(other.to_string()),
        }
    }
}

impl From<ItemFetchError> for ApiError {
    fn from(err: ItemFetchError) -> Self {
        match err {
            ItemFetchError::Auth(e) => Self::Auth(e),
            ItemFetchError::NotFound(_) => Self::NotFound(err.to_string()),
            other => Self::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status != StatusCode::BAD_REQUEST {
            warn!(%status, error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
