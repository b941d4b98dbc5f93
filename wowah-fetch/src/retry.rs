//! Retry policy for Game Data API requests.

use reqwest::StatusCode;
use std::time::Duration;

/// Policy deciding whether and when a failed request is sent again.
#[derive(Debug, Clone)]
pub struct RetryStrategy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Delay before the first retry, in milliseconds.
    pub base_delay_ms: u64,
    /// Whether each retry doubles the previous delay.
    pub exponential_backoff: bool,
    /// Upper bound on any single delay, in milliseconds.
    pub max_delay_ms: u64,
}

impl RetryStrategy {
    /// Creates a policy with `max_attempts` total attempts.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay_ms: 250,
            exponential_backoff: true,
            max_delay_ms: 8_000,
        }
    }

    /// Single attempt, no retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            base_delay_ms: 0,
            exponential_backoff: false,
            max_delay_ms: 0,
        }
    }

    /// Sets the base delay.
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Enables or disables exponential backoff.
    pub fn with_exponential_backoff(mut self, enabled: bool) -> Self {
        self.exponential_backoff = enabled;
        self
    }

    /// Delay to wait after failed attempt number `attempt` (1-based).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay = if self.exponential_backoff {
            let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
            self.base_delay_ms.saturating_mul(factor)
        } else {
            self.base_delay_ms
        };

        Duration::from_millis(delay.min(self.max_delay_ms))
    }

    /// Delay before retrying a busy answer: the server's `Retry-After`
    /// seconds when given, otherwise the backoff for `attempt`. Capped at
    /// `max_delay_ms` either way.
    pub fn retry_delay(&self, attempt: u32, retry_after_secs: Option<u64>) -> Duration {
        let cap = Duration::from_millis(self.max_delay_ms);
        retry_after_secs.map_or_else(
            || self.delay_for_attempt(attempt),
            |secs| Duration::from_secs(secs).min(cap),
        )
    }

    /// Whether a transport error is worth retrying.
    pub fn should_retry(&self, error: &reqwest::Error) -> bool {
        error.is_connect() || error.is_timeout()
    }

    /// Whether a response status is worth retrying.
    pub fn should_retry_status(&self, status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
    }
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_backoff() {
        let strategy = RetryStrategy::default();

        assert_eq!(strategy.delay_for_attempt(1), Duration::from_millis(250));
        assert_eq!(strategy.delay_for_attempt(2), Duration::from_millis(500));
        assert_eq!(strategy.delay_for_attempt(3), Duration::from_millis(1000));
    }

    #[test]
    fn test_max_delay_cap() {
        let strategy = RetryStrategy::new(10).with_base_delay(Duration::from_secs(3));
        assert_eq!(strategy.delay_for_attempt(4), Duration::from_millis(8_000));
    }

    #[test]
    fn test_retry_after_is_capped() {
        let strategy = RetryStrategy::default();
        assert_eq!(strategy.retry_delay(1, Some(2)), Duration::from_secs(2));
        assert_eq!(strategy.retry_delay(1, Some(3600)), Duration::from_millis(8_000));
        assert_eq!(strategy.retry_delay(2, None), Duration::from_millis(500));
    }

    #[test]
    fn test_linear_delay() {
        let strategy = RetryStrategy::new(3)
            .with_base_delay(Duration::from_millis(100))
            .with_exponential_backoff(false);
        assert_eq!(strategy.delay_for_attempt(3), Duration::from_millis(100));
    }

    #[test]
    fn test_retryable_statuses() {
        let strategy = RetryStrategy::default();
        assert!(strategy.should_retry_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(strategy.should_retry_status(StatusCode::BAD_GATEWAY));
        assert!(!strategy.should_retry_status(StatusCode::NOT_FOUND));
        assert!(!strategy.should_retry_status(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_zero_attempts_clamped() {
        assert_eq!(RetryStrategy::new(0).max_attempts, 1);
    }
}
