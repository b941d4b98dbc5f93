//! Blizzard Game Data API client.
//!
//! Every call authenticates through the shared [`TokenProvider`]. When the
//! API rejects a token the provider is invalidated and the call is sent once
//! more with a freshly granted token.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use wowah_core::{
    AuctionsResponse, ConnectedRealm, ConnectedRealmIndex, ItemClass, ItemClassIndex,
    ItemSearchResponse, Region,
};
use wowah_fetch::{ClientCredentials, FetchError, HttpClient, TokenProvider};
use wowah_store::Config;

use crate::error::BlizzardError;

// ============================================================================
// Constants
// ============================================================================

const CONNECTED_REALM_INDEX_ENDPOINT: &str = "/connected-realm/index";
const ITEM_CLASS_INDEX_ENDPOINT: &str = "/item-class/index";
const ITEM_SEARCH_ENDPOINT: &str = "/search/item";

/// Sort order requested from the search endpoint.
const SEARCH_ORDER: &str = "id";

/// Which namespace family a document lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Namespace {
    Static,
    Dynamic,
}

// ============================================================================
// Client
// ============================================================================

/// Client for the WoW Game Data API of one region and locale.
#[derive(Debug, Clone)]
pub struct GameDataClient {
    http: HttpClient,
    tokens: Arc<TokenProvider>,
    region: Region,
    locale: String,
    api_base: String,
}

impl GameDataClient {
    /// Creates a client for `region`, resolving names to `locale`.
    pub fn new(
        http: HttpClient,
        tokens: Arc<TokenProvider>,
        region: Region,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            http,
            tokens,
            region,
            locale: locale.into(),
            api_base: region.api_base(),
        }
    }

    /// Builds the client and its token provider from configuration.
    pub fn from_config(config: &Config) -> Result<Self, BlizzardError> {
        let http = HttpClient::new()?;
        let credentials = ClientCredentials::new(
            config.credentials.client_id.clone(),
            config.credentials.client_secret.clone(),
            config.token_host(),
        );
        let tokens = Arc::new(TokenProvider::client_credentials(credentials, http.clone()));

        Ok(Self::new(http, tokens, config.region, config.locale.clone())
            .with_api_base(config.api_base()))
    }

    /// Overrides the API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Region served by this client.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Locale names are resolved to.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// The shared token provider.
    pub fn tokens(&self) -> &Arc<TokenProvider> {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn namespace(&self, namespace: Namespace) -> String {
        match namespace {
            Namespace::Static => self.region.static_namespace(),
            Namespace::Dynamic => self.region.dynamic_namespace(),
        }
    }

    fn query(
        &self,
        namespace: Namespace,
        localized: bool,
        extra: Vec<(String, String)>,
    ) -> Vec<(String, String)> {
        let mut query = vec![("namespace".to_string(), self.namespace(namespace))];
        if localized {
            query.push(("locale".to_string(), self.locale.clone()));
        }
        query.extend(extra);
        query
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, BlizzardError> {
        let url = self.url(path);
        let pairs: Vec<(&str, &str)> = query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        let mut retried = false;
        loop {
            let token = self.tokens.get_token().await?;
            match self.http.get_json(&url, &pairs, token.secret()).await {
                Ok(value) => return Ok(value),
                Err(FetchError::Unauthorized(body)) if !retried => {
                    warn!(path, %body, "Token rejected, requesting a new one");
                    self.tokens.invalidate().await;
                    retried = true;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    // ------------------------------------------------------------------------
    // Realms and auctions
    // ------------------------------------------------------------------------

    /// Ids of every connected realm in the region.
    #[instrument(skip(self))]
    pub async fn connected_realm_ids(&self) -> Result<Vec<u32>, BlizzardError> {
        let query = self.query(Namespace::Dynamic, true, Vec::new());
        let index: ConnectedRealmIndex = self.get(CONNECTED_REALM_INDEX_ENDPOINT, &query).await?;
        let ids = index.ids();
        debug!(count = ids.len(), "Fetched connected realm index");
        Ok(ids)
    }

    /// Detail of one connected realm.
    #[instrument(skip(self))]
    pub async fn connected_realm(&self, id: u32) -> Result<ConnectedRealm, BlizzardError> {
        let query = self.query(Namespace::Dynamic, true, Vec::new());
        self.get(&format!("/connected-realm/{id}"), &query).await
    }

    /// Current auction listing of a connected realm.
    #[instrument(skip(self))]
    pub async fn auctions(&self, realm_id: u32) -> Result<AuctionsResponse, BlizzardError> {
        let query = self.query(Namespace::Dynamic, true, Vec::new());
        let listing: AuctionsResponse = self
            .get(&format!("/connected-realm/{realm_id}/auctions"), &query)
            .await?;
        debug!(count = listing.auctions.len(), "Fetched auctions");
        Ok(listing)
    }

    // ------------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------------

    /// Raw item document, exactly as the API returns it.
    #[instrument(skip(self))]
    pub async fn item(&self, id: u64) -> Result<Value, BlizzardError> {
        let query = self.query(Namespace::Static, true, Vec::new());
        self.get(&format!("/item/{id}"), &query).await
    }

    /// Index of item classes.
    #[instrument(skip(self))]
    pub async fn item_classes(&self) -> Result<ItemClassIndex, BlizzardError> {
        let query = self.query(Namespace::Static, true, Vec::new());
        self.get(ITEM_CLASS_INDEX_ENDPOINT, &query).await
    }

    /// One item class with its subclasses.
    #[instrument(skip(self))]
    pub async fn item_class(&self, id: u32) -> Result<ItemClass, BlizzardError> {
        let query = self.query(Namespace::Static, true, Vec::new());
        self.get(&format!("/item-class/{id}"), &query).await
    }

    /// Searches items by name in the client's locale.
    ///
    /// Names come back keyed by every locale; use
    /// [`ItemSearchResponse::to_page`] to flatten them.
    #[instrument(skip(self))]
    pub async fn search_items(
        &self,
        name: &str,
        page: u32,
    ) -> Result<ItemSearchResponse, BlizzardError> {
        let query = self.query(Namespace::Static, false, self.search_params(name, page));
        self.get(ITEM_SEARCH_ENDPOINT, &query).await
    }

    fn search_params(&self, name: &str, page: u32) -> Vec<(String, String)> {
        vec![
            (format!("name.{}", self.locale), name.to_string()),
            ("orderby".to_string(), SEARCH_ORDER.to_string()),
            ("_page".to_string(), page.max(1).to_string()),
        ]
    }
}
