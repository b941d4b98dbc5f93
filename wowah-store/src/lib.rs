// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `wowah` Store
//!
//! Everything `wowah` keeps on disk.
//!
//! - **Config**: JSON settings file with environment overrides
//! - **ItemCache**: One memo file per item id, never invalidated
//! - **Persistence**: Atomic JSON file helpers and default paths
//!
//! ## Usage
//!
//! ```ignore
//! use wowah_store::{Config, ItemCache};
//!
//! let config = Config::load(None)?;
//! config.validate()?;
//!
//! let cache = ItemCache::new(config.cache_dir());
//! if let Ok(Some(raw)) = cache.load(19019).await {
//!     println!("{raw}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod item_cache;
pub mod persistence;

pub use config::{Config, CredentialsConfig, EnrichmentConfig, ServerConfig};
pub use error::{CacheReadError, StoreError};
pub use item_cache::ItemCache;
pub use persistence::{
    default_cache_dir, default_config_dir, default_config_path, default_item_cache_dir,
    ensure_dir, load_json, load_json_or_default, save_json, write_json_atomic,
};

#[cfg(test)]
mod persistence_tests;
