//! OAuth access token types.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifetime assumed when the token endpoint omits `expires_in`.
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Longest lifetime honoured from `expires_in`; larger values are clamped.
pub const MAX_TOKEN_LIFETIME_SECS: i64 = 30 * 24 * 3600;

// ============================================================================
// Token Response
// ============================================================================

/// Body returned by the client-credentials token endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// The bearer token.
    pub access_token: String,
    /// Token type (usually "bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Seconds until expiry, relative to issue time.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Subject the token was issued to.
    #[serde(default)]
    pub sub: Option<String>,
}

// ============================================================================
// Access Token
// ============================================================================

/// A bearer token together with the instant it stops being valid.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    secret: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a token that expires at `expires_at`.
    pub fn new(secret: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            secret: secret.into(),
            expires_at,
        }
    }

    /// Builds a token from a grant response received at `issued_at`.
    ///
    /// `expires_in` is clamped to [`MAX_TOKEN_LIFETIME_SECS`]; a missing or
    /// non-positive value means [`DEFAULT_TOKEN_LIFETIME_SECS`].
    pub fn from_response(response: TokenResponse, issued_at: DateTime<Utc>) -> Self {
        let lifetime = response
            .expires_in
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS)
            .min(MAX_TOKEN_LIFETIME_SECS);

        let expires_at = TimeDelta::try_seconds(lifetime)
            .and_then(|delta| issued_at.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            secret: response.access_token,
            expires_at,
        }
    }

    /// Returns the bearer string.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Returns the expiry instant.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// True once `now` has reached the expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Value for an `Authorization` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.secret)
    }

    /// Secret with everything past the first four characters masked.
    pub fn masked(&self) -> String {
        let visible: String = self.secret.chars().take(4).collect();
        format!("{visible}…")
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &self.masked())
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
