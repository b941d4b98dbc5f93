//! Serve command - run the HTTP API.

use anyhow::Result;
use clap::Args;

use super::load_config;
use crate::server;
use crate::Cli;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Listen address, overriding the configured one.
    #[arg(long, short, value_name = "ADDR")]
    pub bind: Option<String>,
}

/// Runs the HTTP server until interrupted.
pub async fn run(args: &ServeArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    config.validate()?;

    let bind = args
        .bind
        .clone()
        .unwrap_or_else(|| config.server.bind.clone());
    server::run(&config, &bind).await
}
