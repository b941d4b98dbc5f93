//! HTTP client shared by the token grant and the Game Data API calls.

use crate::error::{truncate_body, FetchError};
use crate::retry::RetryStrategy;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("wowah/", env!("CARGO_PKG_VERSION"));

/// HTTP client with retry capabilities.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    retry_strategy: RetryStrategy,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            inner: client,
            retry_strategy: RetryStrategy::default(),
        })
    }

    /// Sets the retry strategy for this client.
    pub fn with_retry_strategy(mut self, strategy: RetryStrategy) -> Self {
        self.retry_strategy = strategy;
        self
    }

    /// The underlying reqwest client.
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    /// Performs a GET request with a bearer token.
    ///
    /// Connection failures, timeouts, 429 and 5xx answers are retried
    /// according to the retry strategy. 401 maps to
    /// [`FetchError::Unauthorized`], 404 to [`FetchError::NotFound`] and any
    /// other non-success status to [`FetchError::Status`].
    pub async fn get_with_auth(
        &self,
        url: &str,
        query: &[(&str, &str)],
        bearer: &str,
    ) -> Result<Response, FetchError> {
        let mut attempts = 0;
        let max_attempts = self.retry_strategy.max_attempts;

        loop {
            attempts += 1;
            debug!(url = %url, attempt = attempts, "GET");

            let result = self
                .inner
                .get(url)
                .query(query)
                .header(header::AUTHORIZATION, format!("Bearer {bearer}"))
                .send()
                .await;

            let response = match result {
                Ok(response) => response,
                Err(e) => {
                    if attempts < max_attempts && self.retry_strategy.should_retry(&e) {
                        let delay = self.retry_strategy.delay_for_attempt(attempts);
                        warn!(
                            error = %e,
                            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                            "Request failed, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(e.into());
                }
            };

            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }

            if self.retry_strategy.should_retry_status(status) {
                let retry_after = retry_after_secs(&response);
                if attempts < max_attempts {
                    let delay = self.retry_strategy.retry_delay(attempts, retry_after);
                    warn!(%status, attempt = attempts, "Upstream busy, retrying");
                    tokio::time::sleep(delay).await;
                    continue;
                }
                if status == StatusCode::TOO_MANY_REQUESTS {
                    return Err(FetchError::RateLimited { retry_after });
                }
            }

            return Err(status_error(url, response).await);
        }
    }

    /// GET with a bearer token, decoding the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        bearer: &str,
    ) -> Result<T, FetchError> {
        let response = self.get_with_auth(url, query, bearer).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// POSTs a form body. The response is returned whatever its status.
    pub async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<Response, FetchError> {
        debug!(url = %url, "POST form");
        Ok(self.inner.post(url).form(form).send().await?)
    }
}

fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

async fn status_error(url: &str, response: Response) -> FetchError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED => FetchError::Unauthorized(truncate_body(&body)),
        StatusCode::NOT_FOUND => FetchError::NotFound(url.to_string()),
        _ => FetchError::Status {
            status: status.as_u16(),
            body: truncate_body(&body),
        },
    }
}
