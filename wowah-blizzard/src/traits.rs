//! Trait definitions for upstream item lookups.
//!
//! The enrichment pipeline only needs "give me the raw document for this
//! item id". Production code uses [`GameDataClient`]; tests substitute
//! sources that count calls, stall, or fail on demand.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::api::GameDataClient;
use crate::error::ItemFetchError;

/// Source of raw item documents.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetches the raw item document for `id`.
    async fn fetch_item(&self, id: u64) -> Result<Value, ItemFetchError>;
}

#[async_trait]
impl ItemSource for GameDataClient {
    async fn fetch_item(&self, id: u64) -> Result<Value, ItemFetchError> {
        self.item(id)
            .await
            .map_err(|e| ItemFetchError::from_blizzard(id, e))
    }
}

#[async_trait]
impl<T: ItemSource + ?Sized> ItemSource for Arc<T> {
    async fn fetch_item(&self, id: u64) -> Result<Value, ItemFetchError> {
        (**self).fetch_item(id).await
    }
}
