//! OAuth2 client-credentials tokens.
//!
//! [`TokenProvider`] holds at most one [`AccessToken`] and only talks to the
//! token endpoint when that token is absent or expired. The grant itself sits
//! behind the [`TokenGrant`] trait so the provider can be driven by a mock.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use url::Url;
use wowah_core::{AccessToken, Clock, SystemClock, TokenResponse};

use crate::client::HttpClient;
use crate::error::{truncate_body, AuthError, FetchError};

/// Path of the token endpoint below the token host.
const TOKEN_PATH: &str = "/oauth/token";

// ============================================================================
// Grant
// ============================================================================

/// Performs one token grant.
#[async_trait]
pub trait TokenGrant: Send + Sync {
    /// Requests a fresh token from the authorization server.
    async fn request_token(&self) -> Result<TokenResponse, AuthError>;
}

/// Application credentials for the client-credentials flow.
#[derive(Clone)]
pub struct ClientCredentials {
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Scheme and host of the authorization server, e.g. `https://kr.battle.net`.
    pub token_host: String,
}

impl ClientCredentials {
    /// Creates a credential set.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        token_host: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_host: token_host.into(),
        }
    }

    /// True when either the id or the secret is empty.
    pub fn is_incomplete(&self) -> bool {
        self.client_id.trim().is_empty() || self.client_secret.trim().is_empty()
    }

    /// Full URL of the token endpoint.
    pub fn token_url(&self) -> Result<Url, AuthError> {
        let host = self.token_host.trim().trim_end_matches('/');
        let url = Url::parse(&format!("{host}{TOKEN_PATH}"))
            .map_err(|e| AuthError::InvalidTokenHost(format!("{}: {e}", self.token_host)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AuthError::InvalidTokenHost(self.token_host.clone()));
        }
        Ok(url)
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_host", &self.token_host)
            .finish()
    }
}

#[async_trait]
impl<T: TokenGrant + ?Sized> TokenGrant for Arc<T> {
    async fn request_token(&self) -> Result<TokenResponse, AuthError> {
        (**self).request_token().await
    }
}

/// Client-credentials grant over HTTP.
#[derive(Debug, Clone)]
pub struct ClientCredentialsGrant {
    credentials: ClientCredentials,
    http: HttpClient,
}

impl ClientCredentialsGrant {
    /// Creates a grant using `http` for the token request.
    pub fn new(credentials: ClientCredentials, http: HttpClient) -> Self {
        Self { credentials, http }
    }

    /// The configured credentials.
    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }
}

#[async_trait]
impl TokenGrant for ClientCredentialsGrant {
    #[instrument(skip(self), fields(host = %self.credentials.token_host))]
    async fn request_token(&self) -> Result<TokenResponse, AuthError> {
        if self.credentials.is_incomplete() {
            return Err(AuthError::MissingCredentials);
        }
        let url = self.credentials.token_url()?;

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];

        let response = self
            .http
            .post_form(url.as_str(), &form)
            .await
            .map_err(|e| match e {
                FetchError::Http(err) => AuthError::from(err),
                other => AuthError::Request(other.to_string()),
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%status, "Token request rejected");
            return Err(AuthError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        parse_token_response(&body)
    }
}

/// Parses a token endpoint body, rejecting bodies without a bearer token.
pub fn parse_token_response(body: &str) -> Result<TokenResponse, AuthError> {
    let response: TokenResponse = serde_json::from_str(body)
        .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

    if response.access_token.is_empty() {
        return Err(AuthError::MalformedResponse(
            "empty access_token".to_string(),
        ));
    }
    Ok(response)
}

// ============================================================================
// Provider
// ============================================================================

/// Supplies a currently valid bearer token.
///
/// Refreshes are serialized: concurrent callers that find the token missing
/// or expired wait on the same lock, and only the first performs a grant.
/// A failed grant leaves the provider empty, so the next call tries again.
pub struct TokenProvider<G = ClientCredentialsGrant, C = SystemClock> {
    grant: G,
    clock: C,
    current: Mutex<Option<AccessToken>>,
}

impl TokenProvider {
    /// Provider performing client-credentials grants against the real clock.
    pub fn client_credentials(credentials: ClientCredentials, http: HttpClient) -> Self {
        Self::new(ClientCredentialsGrant::new(credentials, http))
    }
}

impl<G: TokenGrant> TokenProvider<G, SystemClock> {
    /// Creates a provider using the system clock.
    pub fn new(grant: G) -> Self {
        Self::with_clock(grant, SystemClock)
    }
}

impl<G: TokenGrant, C: Clock> TokenProvider<G, C> {
    /// Creates a provider with an explicit clock.
    pub fn with_clock(grant: G, clock: C) -> Self {
        Self {
            grant,
            clock,
            current: Mutex::new(None),
        }
    }

    /// Returns the held token, or obtains a new one if it is absent or its
    /// expiry instant is at or before now.
    ///
    /// # Errors
    ///
    /// Returns the grant's [`AuthError`] unchanged. Nothing is retained.
    pub async fn get_token(&self) -> Result<AccessToken, AuthError> {
        let mut current = self.current.lock().await;
        let now = self.clock.now();

        if let Some(token) = current.as_ref() {
            if !token.is_expired_at(now) {
                return Ok(token.clone());
            }
            debug!(expired_at = %token.expires_at(), "Access token expired");
        }
        *current = None;

        let response = self.grant.request_token().await?;
        let token = AccessToken::from_response(response, self.clock.now());
        info!(expires_at = %token.expires_at(), "Obtained access token");

        *current = Some(token.clone());
        Ok(token)
    }

    /// Drops the held token so the next call performs a grant.
    pub async fn invalidate(&self) {
        let mut current = self.current.lock().await;
        if current.take().is_some() {
            debug!("Access token invalidated");
        }
    }

    /// The held token, expired or not, without triggering a grant.
    pub async fn cached(&self) -> Option<AccessToken> {
        self.current.lock().await.clone()
    }
}

impl<G, C> fmt::Debug for TokenProvider<G, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider").finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
