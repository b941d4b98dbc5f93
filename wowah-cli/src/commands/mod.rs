//! CLI command implementations.

pub mod auctions;
pub mod classes;
pub mod config;
pub mod items;
pub mod realms;
pub mod search;
pub mod serve;
pub mod token;

use anyhow::Result;
use std::sync::Arc;
use tracing::debug;
use wowah_blizzard::GameDataClient;
use wowah_store::Config;

use crate::Cli;

/// Loads the config file named by `--config` (or the default one) with
/// environment overrides applied.
pub fn load_config(cli: &Cli) -> Result<Config> {
    Ok(Config::load(cli.config.as_deref())?)
}

/// Loads and validates the config, and builds the API client.
pub fn api_client(cli: &Cli) -> Result<(Config, Arc<GameDataClient>)> {
    let config = load_config(cli)?;
    config.validate()?;

    let client = GameDataClient::from_config(&config)?;
    debug!(region = %config.region, locale = %config.locale, "API client ready");
    Ok((config, Arc::new(client)))
}
