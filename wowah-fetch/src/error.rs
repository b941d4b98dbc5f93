//! Fetch error types.

use thiserror::Error;

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for HTTP fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by the upstream API.
    #[error("Rate limited, retry after {retry_after:?} seconds")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after: Option<u64>,
    },

    /// The bearer token was rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The requested document does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Returns true if this is a transient error that might succeed on retry.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::RateLimited { .. } => true,
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

// ============================================================================
// Auth Error
// ============================================================================

/// Error type for the OAuth client-credentials grant.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Client id or secret is empty.
    #[error("Client credentials are not configured")]
    MissingCredentials,

    /// The token host is not a valid URL.
    #[error("Invalid token host: {0}")]
    InvalidTokenHost(String),

    /// The grant request could not be sent or its body could not be read.
    #[error("Token request failed: {0}")]
    Request(String),

    /// The token endpoint answered with a non-success status.
    #[error("Token endpoint returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The response did not contain a bearer token.
    #[error("Malformed token response: {0}")]
    MalformedResponse(String),
}

impl AuthError {
    /// Upstream HTTP status, when the token endpoint answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AuthError::Request(format!("Request timed out: {err}"))
        } else if err.is_connect() {
            AuthError::Request(format!("Connection failed: {err}"))
        } else {
            AuthError::Request(err.to_string())
        }
    }
}

/// Maximum number of body characters kept in error messages.
pub(crate) const ERROR_BODY_LIMIT: usize = 200;

/// Truncates a response body for inclusion in an error.
pub(crate) fn truncate_body(body: &str) -> String {
    body.chars().take(ERROR_BODY_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_transient_only_for_5xx() {
        let server = FetchError::Status {
            status: 503,
            body: String::new(),
        };
        let client = FetchError::Status {
            status: 400,
            body: String::new(),
        };
        assert!(server.is_transient());
        assert!(!client.is_transient());
        assert!(FetchError::RateLimited { retry_after: None }.is_transient());
        assert!(!FetchError::NotFound("x".into()).is_transient());
    }

    #[test]
    fn test_auth_status_accessor() {
        let err = AuthError::Status {
            status: 401,
            body: "invalid_client".into(),
        };
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("invalid_client"));
        assert_eq!(AuthError::MissingCredentials.status(), None);
    }

    #[test]
    fn test_truncate_body() {
        let long = "x".repeat(1000);
        assert_eq!(truncate_body(&long).len(), ERROR_BODY_LIMIT);
        assert_eq!(truncate_body("short"), "short");
    }
}
