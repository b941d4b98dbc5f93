//! Batch item enrichment.
//!
//! Resolves item ids to `{id, name, classid}` records. Each id is served
//! from the on-disk memo when possible; otherwise it is fetched upstream
//! under a shared concurrency limit and a per-item timeout, and the raw
//! document is memoized. Failed items come back as unresolved placeholders
//! and are never memoized.

use futures::future::try_join_all;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, instrument, warn};
use wowah_core::{ItemBatchRequest, ItemRecord, RecordSource};
use wowah_fetch::AuthError;
use wowah_store::{Config, ItemCache};

use crate::api::GameDataClient;
use crate::error::ItemFetchError;
use crate::traits::ItemSource;

/// Default bound on simultaneous upstream item fetches.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 5;

/// Default per-item fetch timeout.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Cache-backed, concurrency-limited item resolver.
///
/// The limiter is shared by every batch run through the same pipeline.
pub struct ItemEnrichmentPipeline<S = GameDataClient> {
    source: Arc<S>,
    cache: ItemCache,
    locale: String,
    limiter: Arc<Semaphore>,
    max_concurrent: usize,
    fetch_timeout: Duration,
}

impl<S: ItemSource> ItemEnrichmentPipeline<S> {
    /// Creates a pipeline with the default limit and timeout.
    pub fn new(source: Arc<S>, cache: ItemCache, locale: impl Into<String>) -> Self {
        Self {
            source,
            cache,
            locale: locale.into(),
            limiter: Arc::new(Semaphore::new(DEFAULT_MAX_CONCURRENT_FETCHES)),
            max_concurrent: DEFAULT_MAX_CONCURRENT_FETCHES,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Creates a pipeline using the cache location, locale and tuning from
    /// `config`.
    pub fn from_config(source: Arc<S>, config: &Config) -> Self {
        Self::new(source, ItemCache::new(config.cache_dir()), config.locale.clone())
            .with_max_concurrent_fetches(config.enrichment.max_concurrent_fetches)
            .with_fetch_timeout(config.fetch_timeout())
    }

    /// Sets the concurrency limit (at least 1).
    pub fn with_max_concurrent_fetches(mut self, limit: usize) -> Self {
        let limit = limit.max(1);
        self.max_concurrent = limit;
        self.limiter = Arc::new(Semaphore::new(limit));
        self
    }

    /// Sets the per-item fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// The memo store.
    pub fn cache(&self) -> &ItemCache {
        &self.cache
    }

    /// Locale names are resolved to.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Concurrency limit.
    pub fn max_concurrent_fetches(&self) -> usize {
        self.max_concurrent
    }

    /// Per-item fetch timeout.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Resolves every unique id in `ids`.
    ///
    /// Returns one record per unique id, sorted by id. Per-item failures
    /// become unresolved records.
    ///
    /// # Errors
    ///
    /// Fails only when no access token can be obtained; the remaining
    /// lookups of the batch are abandoned. Records already resolved from
    /// the cache are discarded along with them.
    #[instrument(skip_all)]
    pub async fn resolve_items<I>(&self, ids: I) -> Result<Vec<ItemRecord>, AuthError>
    where
        I: IntoIterator<Item = u64>,
    {
        let ids: BTreeSet<u64> = ids.into_iter().collect();
        debug!(count = ids.len(), "Resolving items");

        let records = try_join_all(ids.into_iter().map(|id| self.resolve_one(id))).await?;

        let unresolved = records.iter().filter(|r| !r.is_resolved()).count();
        if unresolved > 0 {
            warn!(unresolved, total = records.len(), "Some items could not be resolved");
        }
        Ok(records)
    }

    /// Resolves the items referenced by a caller batch.
    pub async fn resolve_batch(
        &self,
        request: &ItemBatchRequest,
    ) -> Result<Vec<ItemRecord>, AuthError> {
        self.resolve_items(request.item_ids()).await
    }

    /// Raw document for one item, memo first.
    ///
    /// Unlike batch resolution, failures are returned to the caller.
    pub async fn item_raw(&self, id: u64) -> Result<Value, ItemFetchError> {
        self.item_lookup(id).await.map(|(raw, _)| raw)
    }

    /// Like [`item_raw`](Self::item_raw), also reporting whether the
    /// document came from the cache or the network.
    #[instrument(skip(self))]
    pub async fn item_lookup(&self, id: u64) -> Result<(Value, RecordSource), ItemFetchError> {
        if let Some(raw) = self.cached(id).await {
            return Ok((raw, RecordSource::Cache));
        }
        let raw = self.fetch_and_store(id).await?;
        Ok((raw, RecordSource::Network))
    }

    async fn resolve_one(&self, id: u64) -> Result<ItemRecord, AuthError> {
        if let Some(raw) = self.cached(id).await {
            return Ok(ItemRecord::from_raw(id, &raw, &self.locale, RecordSource::Cache));
        }

        match self.fetch_and_store(id).await {
            Ok(raw) => Ok(ItemRecord::from_raw(
                id,
                &raw,
                &self.locale,
                RecordSource::Network,
            )),
            Err(ItemFetchError::Auth(e)) => Err(e),
            Err(e) => {
                warn!(id, error = %e, "Item unresolved");
                Ok(ItemRecord::unresolved(id))
            }
        }
    }

    async fn cached(&self, id: u64) -> Option<Value> {
        match self.cache.load(id).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(id, error = %e, "Ignoring unusable cache file");
                None
            }
        }
    }

    async fn fetch_and_store(&self, id: u64) -> Result<Value, ItemFetchError> {
        let permit = self
            .limiter
            .acquire()
            .await
            .map_err(|_| ItemFetchError::Http("fetch limiter closed".to_string()))?;

        let raw = tokio::time::timeout(self.fetch_timeout, self.source.fetch_item(id))
            .await
            .map_err(|_| ItemFetchError::Timeout(self.fetch_timeout))??;
        drop(permit);

        if let Err(e) = self.cache.store(id, &raw).await {
            warn!(id, error = %e, "Failed to cache item");
        }
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use tempfile::TempDir;

    struct FixedSource;

    #[async_trait]
    impl ItemSource for FixedSource {
        async fn fetch_item(&self, id: u64) -> Result<Value, ItemFetchError> {
            if id == 404 {
                return Err(ItemFetchError::NotFound(id));
            }
            Ok(json!({"id": id, "name": {"ko_KR": format!("아이템 {id}")}, "item_class": {"id": 15}}))
        }
    }

    fn pipeline(temp: &TempDir) -> ItemEnrichmentPipeline<FixedSource> {
        ItemEnrichmentPipeline::new(Arc::new(FixedSource), ItemCache::new(temp.path()), "ko_KR")
    }

    #[test]
    fn test_limit_clamped() {
        let temp = TempDir::new().unwrap();
        let pipeline = pipeline(&temp).with_max_concurrent_fetches(0);
        assert_eq!(pipeline.max_concurrent_fetches(), 1);
        assert_eq!(pipeline.fetch_timeout(), DEFAULT_FETCH_TIMEOUT);
    }

    #[tokio::test]
    async fn test_resolve_dedups_and_sorts() {
        let temp = TempDir::new().unwrap();
        let records = pipeline(&temp)
            .resolve_items([9, 3, 9, 404, 3])
            .await
            .unwrap();

        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 9, 404]);
        assert_eq!(records[0].name, "아이템 3");
        assert_eq!(records[0].classid, Some(15));
        assert!(!records[2].is_resolved());
        assert_eq!(records[2].name, "Unknown");
    }

    #[tokio::test]
    async fn test_resolve_batch_request() {
        let temp = TempDir::new().unwrap();
        let request: ItemBatchRequest = serde_json::from_value(json!({
            "auctions": [{"item": {"id": 2}}, {"item": {}}, {"item": {"id": 2}}]
        }))
        .unwrap();

        let records = pipeline(&temp).resolve_batch(&request).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, RecordSource::Network);
    }

    #[tokio::test]
    async fn test_item_raw_propagates_errors() {
        let temp = TempDir::new().unwrap();
        let pipeline = pipeline(&temp);

        assert!(matches!(
            pipeline.item_raw(404).await,
            Err(ItemFetchError::NotFound(404))
        ));

        let raw = pipeline.item_raw(5).await.unwrap();
        assert_eq!(raw["id"], 5);
        assert!(pipeline.cache().contains(5).await);
    }

    #[tokio::test]
    async fn test_item_lookup_reports_source() {
        let temp = TempDir::new().unwrap();
        let pipeline = pipeline(&temp);

        let (_, first) = pipeline.item_lookup(7).await.unwrap();
        assert_eq!(first, RecordSource::Network);

        let (raw, second) = pipeline.item_lookup(7).await.unwrap();
        assert_eq!(second, RecordSource::Cache);
        assert_eq!(raw["id"], 7);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let temp = TempDir::new().unwrap();
        let records = pipeline(&temp).resolve_items(Vec::new()).await.unwrap();
        assert!(records.is_empty());
    }
}
