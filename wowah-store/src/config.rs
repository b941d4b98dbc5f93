//! Configuration management.
//!
//! The config file is JSON. Environment variables take precedence over the
//! file for the fields deployments usually inject (credentials, region,
//! locale, endpoints, cache location, bind address).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use wowah_core::Region;

use crate::error::StoreError;
use crate::persistence::{default_config_path, default_item_cache_dir, save_json};

/// Environment variable holding the OAuth client id.
pub const ENV_CLIENT_ID: &str = "CLIENT_ID";
/// Environment variable holding the OAuth client secret.
pub const ENV_CLIENT_SECRET: &str = "CLIENT_SECRET";
/// Environment variable overriding the token host.
pub const ENV_TOKEN_HOST: &str = "OAUTH_TOKEN_HOST";
/// Environment variable selecting the region.
pub const ENV_REGION: &str = "REGION";
/// Environment variable selecting the locale.
pub const ENV_LOCALE: &str = "LOCALE";
/// Environment variable overriding the Game Data API base URL.
pub const ENV_API_BASE: &str = "WOWAH_API_BASE";
/// Environment variable overriding the item cache directory.
pub const ENV_CACHE_DIR: &str = "WOWAH_CACHE_DIR";
/// Environment variable overriding the server bind address.
pub const ENV_BIND: &str = "WOWAH_BIND";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OAuth application credentials.
    #[serde(default)]
    pub credentials: CredentialsConfig,
    /// Battle.net region.
    #[serde(default)]
    pub region: Region,
    /// Locale used for names, e.g. `ko_KR`.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Token host override; defaults to the region's host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_host: Option<String>,
    /// API base override; defaults to the region's base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Item cache directory override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
    /// Batch enrichment tuning.
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// OAuth client credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Client id.
    #[serde(default)]
    pub client_id: String,
    /// Client secret.
    #[serde(default)]
    pub client_secret: String,
}

/// Batch enrichment tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    /// Upper bound on simultaneous item fetches.
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,
    /// Per-item fetch timeout in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_locale() -> String {
    "ko_KR".to_string()
}

fn default_max_concurrent_fetches() -> usize {
    5
}

fn default_fetch_timeout_secs() -> u64 {
    5
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: default_max_concurrent_fetches(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: CredentialsConfig::default(),
            region: Region::default(),
            locale: default_locale(),
            token_host: None,
            api_base: None,
            cache_dir: None,
            enrichment: EnrichmentConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        default_config_path()
    }

    /// Loads the file at `path` (defaults when missing) and applies the
    /// process environment on top.
    pub fn load(path: Option<&Path>) -> Result<Self, StoreError> {
        let path = path.map_or_else(Self::default_path, Path::to_path_buf);
        let mut config = Self::load_from(&path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Saves configuration to `path` with owner-only permissions.
    pub async fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        save_json(path, self).await?;
        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Overrides fields from environment variables read through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), StoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(id) = get(ENV_CLIENT_ID) {
            self.credentials.client_id = id;
        }
        if let Some(secret) = get(ENV_CLIENT_SECRET) {
            self.credentials.client_secret = secret;
        }
        if let Some(region) = get(ENV_REGION) {
            self.region = region
                .parse()
                .map_err(|e| StoreError::Config(format!("{ENV_REGION}: {e}")))?;
        }
        if let Some(locale) = get(ENV_LOCALE) {
            self.locale = locale;
        }
        if let Some(host) = get(ENV_TOKEN_HOST) {
            self.token_host = Some(host);
        }
        if let Some(base) = get(ENV_API_BASE) {
            self.api_base = Some(base);
        }
        if let Some(dir) = get(ENV_CACHE_DIR) {
            self.cache_dir = Some(PathBuf::from(dir));
        }
        if let Some(bind) = get(ENV_BIND) {
            self.server.bind = bind;
        }
        Ok(())
    }

    /// Checks the settings needed to talk to the API.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.credentials.client_id.trim().is_empty()
            || self.credentials.client_secret.trim().is_empty()
        {
            return Err(StoreError::Config(format!(
                "client credentials missing; set {ENV_CLIENT_ID} and {ENV_CLIENT_SECRET}"
            )));
        }
        if self.locale.trim().is_empty() {
            return Err(StoreError::Config("locale must not be empty".to_string()));
        }
        if self.enrichment.max_concurrent_fetches == 0 {
            return Err(StoreError::Config(
                "enrichment.max_concurrent_fetches must be at least 1".to_string(),
            ));
        }
        if self.enrichment.fetch_timeout_secs == 0 {
            return Err(StoreError::Config(
                "enrichment.fetch_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Token host in effect.
    pub fn token_host(&self) -> String {
        self.token_host
            .clone()
            .unwrap_or_else(|| self.region.token_host())
    }

    /// Game Data API base URL in effect.
    pub fn api_base(&self) -> String {
        self.api_base
            .as_deref()
            .map(|b| b.trim_end_matches('/').to_string())
            .unwrap_or_else(|| self.region.api_base())
    }

    /// Item cache directory in effect.
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(default_item_cache_dir)
    }

    /// Per-item fetch timeout.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.enrichment.fetch_timeout_secs)
    }

    /// Copy safe to print, with the client secret masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.credentials.client_secret.is_empty() {
            copy.credentials.client_secret = "********".to_string();
        }
        copy
    }
}
