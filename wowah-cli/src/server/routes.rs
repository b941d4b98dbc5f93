//! API route handlers.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;
use wowah_core::{
    Auction, AuctionsResponse, ConnectedRealm, ItemBatchRequest, ItemClass, ItemClassSummary, ItemRecord,
    ItemSearchPage,
};

use super::error::ApiError;
use super::AppState;

type Params = Query<HashMap<String, String>>;

/// Parses a required query parameter.
fn required<T: FromStr>(params: &HashMap<String, String>, name: &str) -> Result<T, ApiError> {
    let raw = params
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request(format!("{name} parameter is required")))?;
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("{name} parameter is invalid: {raw}")))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /api/connected-realms`
pub async fn connected_realms(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let ids = state.client.connected_realm_ids().await?;
    Ok(Json(json!({ "connectedRealmIds": ids })))
}

/// `GET /api/connected-realm?connectedRealmId=`
pub async fn connected_realm(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<ConnectedRealm>, ApiError> {
    let id: u32 = required(&params, "connectedRealmId")?;
    Ok(Json(state.client.connected_realm(id).await?))
}

/// `GET /api/auctions?connectedRealmId=`
pub async fn auctions(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<AuctionsResponse>, ApiError> {
    let id: u32 = required(&params, "connectedRealmId")?;
    Ok(Json(state.client.auctions(id).await?))
}

/// `GET /api/auctions-by-item?realmId=&itemId=`
pub async fn auctions_by_item(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<Vec<Auction>>, ApiError> {
    let realm_id: u32 = required(&params, "realmId")?;
    let item_id: u64 = required(&params, "itemId")?;
    let listing = state.client.auctions(realm_id).await?;
    Ok(Json(listing.for_item(item_id)))
}

/// `GET /api/item?itemId=`
pub async fn item(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<Value>, ApiError> {
    let id: u64 = required(&params, "itemId")?;
    Ok(Json(state.pipeline.item_raw(id).await?))
}

/// `POST /api/items`
pub async fn items(
    State(state): State<AppState>,
    body: Result<Json<ItemBatchRequest>, JsonRejection>,
) -> Result<Json<Vec<ItemRecord>>, ApiError> {
    let Json(request) = body.map_err(|e| {
        debug!(error = %e, "Rejected batch body");
        ApiError::bad_request("Invalid auctions data")
    })?;
    Ok(Json(state.pipeline.resolve_batch(&request).await?))
}

/// `GET /api/item-search?name=&page=`
pub async fn item_search(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<ItemSearchPage>, ApiError> {
    let name: String = required(&params, "name")?;
    let page = if params.contains_key("page") {
        required(&params, "page")?
    } else {
        1
    };
    let response = state.client.search_items(&name, page).await?;
    Ok(Json(response.to_page(state.client.locale())))
}

/// `GET /api/item-classes`
pub async fn item_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemClassSummary>>, ApiError> {
    let index = state.client.item_classes().await?;
    Ok(Json(index.summaries(state.client.locale())))
}

/// `GET /api/item-subclasses?itemClassId=`
pub async fn item_subclasses(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<ItemClass>, ApiError> {
    let id: u32 = required(&params, "itemClassId")?;
    Ok(Json(state.client.item_class(id).await?))
}
