//! Trait definitions for wowah.
//!
//! Collaborators that tests need to substitute live behind traits here.

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of the current time.
///
/// Token expiry checks go through a clock so that expiry can be driven
/// deterministically in tests.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
