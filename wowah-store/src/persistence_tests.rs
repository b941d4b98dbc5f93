//! Persistence round-trip and edge case tests.
//!
//! Tests file I/O operations, JSON persistence, and config round-trip.

use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::Config;
use crate::persistence::{ensure_dir, load_json, load_json_or_default, save_json};
use wowah_core::Region;

// ============================================================================
// JSON Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_config_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("config.json");

    let mut config = Config::default();
    config.region = Region::Tw;
    config.locale = "zh_TW".to_string();
    config.enrichment.max_concurrent_fetches = 8;

    config.save_to(&file_path).await.unwrap();
    let loaded = Config::load_from(&file_path).unwrap();

    assert_eq!(loaded.region, Region::Tw);
    assert_eq!(loaded.locale, "zh_TW");
    assert_eq!(loaded.enrichment.max_concurrent_fetches, 8);
    assert_eq!(loaded.token_host, None);
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let nested_path = temp_dir.path().join("deeply").join("nested").join("config.json");

    let data = serde_json::json!({"key": "value"});

    save_json(&nested_path, &data).await.unwrap();
    assert!(nested_path.exists());
}

#[tokio::test]
async fn test_load_nonexistent_file() {
    let file_path = PathBuf::from("/nonexistent/path/config.json");

    let result: Result<Config, _> = load_json(&file_path).await;
    assert!(result.unwrap_err().is_not_found());
}

#[test]
fn test_missing_config_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.json")).unwrap();
    assert_eq!(config.locale, "ko_KR");
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, "region = kr").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[tokio::test]
async fn test_load_or_default_on_corrupt_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    tokio::fs::write(&path, "{ truncated").await.unwrap();

    let config: Config = load_json_or_default(&path).await;
    assert_eq!(config.server.bind, "127.0.0.1:3000");
}

#[tokio::test]
async fn test_ensure_dir_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let dir_path = temp_dir.path().join("iteminfo");

    ensure_dir(&dir_path).await.unwrap();
    ensure_dir(&dir_path).await.unwrap();

    assert!(dir_path.is_dir());
}

#[tokio::test]
async fn test_save_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    save_json(&path, &serde_json::json!({"v": 1})).await.unwrap();
    save_json(&path, &serde_json::json!({"v": 2})).await.unwrap();

    let loaded: serde_json::Value = load_json(&path).await.unwrap();
    assert_eq!(loaded["v"], 2);
}
