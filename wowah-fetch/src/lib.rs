// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `wowah` Fetch
//!
//! HTTP plumbing and OAuth tokens for talking to the Blizzard APIs.
//!
//! ## Key Types
//!
//! - [`HttpClient`] - reqwest wrapper with bearer GETs and retries
//! - [`RetryStrategy`] - Backoff policy for transient failures
//! - [`TokenProvider`] - Holds one client-credentials token, refreshing on expiry
//! - [`TokenGrant`] - Seam for the token request, mocked in tests
//!
//! ## Example
//!
//! ```ignore
//! use wowah_fetch::{ClientCredentials, HttpClient, TokenProvider};
//!
//! let credentials = ClientCredentials::new(id, secret, "https://kr.battle.net");
//! let provider = TokenProvider::client_credentials(credentials, HttpClient::new()?);
//!
//! let token = provider.get_token().await?;
//! ```

pub mod client;
pub mod error;
pub mod oauth;
pub mod retry;

pub use client::HttpClient;
pub use error::{AuthError, FetchError};
pub use oauth::{
    parse_token_response, ClientCredentials, ClientCredentialsGrant, TokenGrant, TokenProvider,
};
pub use retry::RetryStrategy;
