// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `wowah` Core
//!
//! Core types and models for `wowah`, a World of Warcraft auction-house data
//! service built on the Blizzard Game Data API.
//!
//! This crate provides the foundational types used across all other `wowah`
//! crates:
//!
//! - Domain models (tokens, items, auctions, realms, currency)
//! - Error types
//! - The [`Clock`] abstraction used for token expiry
//!
//! ## Key Types
//!
//! ### Authentication
//! - [`AccessToken`] - Bearer token with expiry instant
//! - [`TokenResponse`] - Body of the client-credentials grant
//!
//! ### Items
//! - [`ItemRecord`] - Enriched `{id, name, classid}` result
//! - [`LocalizedName`] - Plain or locale-keyed name field
//! - [`ItemClassIndex`], [`ItemClass`] - Item class metadata
//!
//! ### Auctions
//! - [`AuctionsResponse`], [`Auction`] - Auction-house listing
//! - [`ItemBatchRequest`] - Caller batch for item enrichment
//! - [`Money`] - Copper amounts split into gold/silver/copper

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Tokens
    AccessToken,
    TokenResponse,
    DEFAULT_TOKEN_LIFETIME_SECS,
    MAX_TOKEN_LIFETIME_SECS,
    // Items
    resolve_name_value,
    ItemClass,
    ItemClassIndex,
    ItemClassRef,
    ItemClassSummary,
    ItemRecord,
    ItemSubclassRef,
    LocalizedName,
    RecordSource,
    UNKNOWN_ITEM_NAME,
    // Auctions
    Auction,
    AuctionItemRef,
    AuctionsResponse,
    BatchEntry,
    BatchItem,
    ItemBatchRequest,
    Money,
    TimeLeft,
    // Realms
    ConnectedRealm,
    ConnectedRealmIndex,
    LinkRef,
    RealmSummary,
    TypedValue,
    // Search
    IdRef,
    ItemSearchHit,
    ItemSearchPage,
    ItemSearchResponse,
    SearchItemData,
    SearchResult,
    // Region
    Region,
};

// Re-export traits
pub use traits::{Clock, SystemClock};
