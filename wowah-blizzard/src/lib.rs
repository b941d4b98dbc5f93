// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `wowah` Blizzard
//!
//! Blizzard Game Data API access and auction item enrichment.
//!
//! ## Key Types
//!
//! - [`GameDataClient`] - Realms, auctions, items, item classes and search
//! - [`ItemEnrichmentPipeline`] - Memoized, concurrency-limited item resolution
//! - [`ItemSource`] - Seam between the pipeline and the API
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use wowah_blizzard::{GameDataClient, ItemEnrichmentPipeline};
//! use wowah_store::Config;
//!
//! let config = Config::load(None)?;
//! let client = Arc::new(GameDataClient::from_config(&config)?);
//! let pipeline = ItemEnrichmentPipeline::from_config(client.clone(), &config);
//!
//! let listing = client.auctions(205).await?;
//! let items = pipeline.resolve_items(listing.item_ids()).await?;
//! ```

pub mod api;
pub mod enrichment;
pub mod error;
pub mod traits;

pub use api::GameDataClient;
pub use enrichment::{ItemEnrichmentPipeline, DEFAULT_FETCH_TIMEOUT, DEFAULT_MAX_CONCURRENT_FETCHES};
pub use error::{BlizzardError, ItemFetchError};
pub use traits::ItemSource;
