//! On-disk memo store for raw item documents.
//!
//! One pretty-printed JSON file per item id (`{dir}/{id}.json`) holding the
//! upstream response exactly as received. Entries are never expired or
//! invalidated.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::error::{CacheReadError, StoreError};
use crate::persistence::write_json_atomic;

/// File-per-key cache of item documents.
#[derive(Debug, Clone)]
pub struct ItemCache {
    dir: PathBuf,
}

impl ItemCache {
    /// Cache rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory of the cache.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Memo file for `id`.
    pub fn path_for(&self, id: u64) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Reads the memo for `id`.
    ///
    /// Returns `Ok(None)` when no file exists, and an error when the file
    /// exists but is unreadable or not valid JSON.
    #[instrument(skip(self))]
    pub async fn load(&self, id: u64) -> Result<Option<Value>, CacheReadError> {
        let path = self.path_for(id);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("cache miss");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let value = serde_json::from_str(&content)?;
        debug!("cache hit");
        Ok(Some(value))
    }

    /// Persists `raw` as the memo for `id`, replacing any previous file.
    #[instrument(skip(self, raw))]
    pub async fn store(&self, id: u64, raw: &Value) -> Result<(), StoreError> {
        write_json_atomic(&self.path_for(id), raw).await?;
        debug!("cached item");
        Ok(())
    }

    /// Whether a memo file exists for `id`, valid or not.
    pub async fn contains(&self, id: u64) -> bool {
        tokio::fs::try_exists(self.path_for(id))
            .await
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_path_layout() {
        let cache = ItemCache::new("/var/cache/wowah/iteminfo");
        assert_eq!(
            cache.path_for(19019),
            PathBuf::from("/var/cache/wowah/iteminfo/19019.json")
        );
    }

    #[tokio::test]
    async fn test_missing_entry_is_none() {
        let temp = TempDir::new().unwrap();
        let cache = ItemCache::new(temp.path().join("never-created"));
        assert!(cache.load(1).await.unwrap().is_none());
        assert!(!cache.contains(1).await);
    }

    #[tokio::test]
    async fn test_store_creates_directory_and_reloads() {
        let temp = TempDir::new().unwrap();
        let cache = ItemCache::new(temp.path().join("iteminfo"));
        let raw = json!({"id": 19019, "name": {"ko_KR": "천둥의 격노"}, "item_class": {"id": 2}});

        cache.store(19019, &raw).await.unwrap();

        assert!(cache.contains(19019).await);
        assert_eq!(cache.load(19019).await.unwrap(), Some(raw));
    }

    #[tokio::test]
    async fn test_file_is_pretty_printed() {
        let temp = TempDir::new().unwrap();
        let cache = ItemCache::new(temp.path());
        cache.store(7, &json!({"id": 7})).await.unwrap();

        let text = std::fs::read_to_string(cache.path_for(7)).unwrap();
        assert!(text.contains('\n'));
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cache = ItemCache::new(temp.path());
        std::fs::write(cache.path_for(5), "{not json").unwrap();

        assert!(matches!(
            cache.load(5).await,
            Err(CacheReadError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_writes_same_key() {
        let temp = TempDir::new().unwrap();
        let cache = ItemCache::new(temp.path());
        let raw = json!({"id": 3, "name": "Linen Cloth"});

        let (a, b, c) = tokio::join!(
            cache.store(3, &raw),
            cache.store(3, &raw),
            cache.store(3, &raw)
        );
        a.unwrap();
        b.unwrap();
        c.unwrap();

        assert_eq!(cache.load(3).await.unwrap(), Some(raw));
        let leftovers = std::fs::read_dir(temp.path())
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .map(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
                    .unwrap_or(false)
            })
            .count();
        assert_eq!(leftovers, 0);
    }
}
