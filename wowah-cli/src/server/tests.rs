//! Router tests that stay offline: only cached items and input validation.

use super::*;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use wowah_store::ItemCache;

fn test_state() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.credentials.client_id = "id".into();
    config.credentials.client_secret = "secret".into();
    config.token_host = Some("http://127.0.0.1:9".into());
    config.cache_dir = Some(dir.path().to_path_buf());
    let state = AppState::from_config(&config).unwrap();
    (dir, state)
}

async fn seed(dir: &TempDir, id: u64, raw: Value) {
    ItemCache::new(dir.path()).store(id, &raw).await.unwrap();
}

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (_dir, state) = test_state();
    let (status, body) = send(state, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_missing_params_are_bad_requests() {
    let (_dir, state) = test_state();
    for uri in [
        "/api/item",
        "/api/item?itemId=abc",
        "/api/connected-realm",
        "/api/auctions?connectedRealmId=",
        "/api/auctions-by-item?realmId=205",
        "/api/auctions-by-item?itemId=2589",
        "/api/auctions-by-item?realmId=205&itemId=-1",
        "/api/item-search",
        "/api/item-search?name=cloth&page=x",
        "/api/item-subclasses",
    ] {
        let (status, body) = send(state.clone(), get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn test_item_served_from_cache() {
    let (dir, state) = test_state();
    let raw = json!({"id": 2589, "name": {"ko_KR": "리넨 옷감"}, "item_class": {"id": 7}});
    seed(&dir, 2589, raw.clone()).await;

    let (status, body) = send(state, get("/api/item?itemId=2589")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, raw);
}

#[tokio::test]
async fn test_batch_from_cache() {
    let (dir, state) = test_state();
    seed(&dir, 2589, json!({"name": {"ko_KR": "리넨 옷감"}, "item_class": {"id": 7}})).await;
    seed(&dir, 2592, json!({"name": "Wool Cloth", "item_class": {"id": 7}})).await;

    let body = r#"{"auctions":[{"item":{"id":2592}},{"item":{"id":2589}},{"item":{"id":2589}},{"item":{}}]}"#;
    let (status, body) = send(state, post_json("/api/items", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 2589, "name": "리넨 옷감", "classid": 7},
            {"id": 2592, "name": "Wool Cloth", "classid": 7}
        ])
    );
}

#[tokio::test]
async fn test_batch_rejects_invalid_body() {
    let (_dir, state) = test_state();
    for body in [r#"{"auctions": 5}"#, r#"{}"#, "not json"] {
        let (status, response) = send(state.clone(), post_json("/api/items", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response["error"], "Invalid auctions data");
    }
}

#[tokio::test]
async fn test_empty_batch() {
    let (_dir, state) = test_state();
    let (status, body) = send(state, post_json("/api/items", r#"{"auctions":[]}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
