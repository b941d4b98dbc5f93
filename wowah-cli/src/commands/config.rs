//! Config command - inspect and create the configuration file.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wowah_store::{default_config_dir, Config};

use super::load_config;
use crate::output::JsonFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration (secrets redacted).
    Show,

    /// Show configuration and cache paths.
    Path,

    /// Write a default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// Runs the config command.
pub async fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli),
        ConfigAction::Path => show_paths(cli),
        ConfigAction::Init { force } => init_config(*force, cli).await,
    }
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(Config::default_path)
}

fn show_config(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?.redacted();

    match cli.format {
        OutputFormat::Text => {
            println!("wowah Configuration");
            println!("{}", "─".repeat(40));
            println!();
            println!("Client id:       {}", config.credentials.client_id);
            println!("Client secret:   {}", config.credentials.client_secret);
            println!("Region:          {}", config.region);
            println!("Locale:          {}", config.locale);
            println!("Token host:      {}", config.token_host());
            println!("API base:        {}", config.api_base());
            println!("Item cache:      {}", config.cache_dir().display());
            println!(
                "Max concurrent:  {}",
                config.enrichment.max_concurrent_fetches
            );
            println!("Fetch timeout:   {}s", config.enrichment.fetch_timeout_secs);
            println!("Bind:            {}", config.server.bind);
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&config)?);
        }
    }

    Ok(())
}

fn show_paths(cli: &Cli) -> Result<()> {
    let config_dir = default_config_dir();
    let config_file = config_path(cli);
    let cache_dir = load_config(cli)?.cache_dir();

    match cli.format {
        OutputFormat::Text => {
            println!("Configuration Paths");
            println!("{}", "─".repeat(40));
            println!();
            println!("Config dir:  {}", config_dir.display());
            println!("Config file: {}", config_file.display());
            println!("Item cache:  {}", cache_dir.display());
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_dir": config_dir.display().to_string(),
                "config_file": config_file.display().to_string(),
                "item_cache": cache_dir.display().to_string(),
            });
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&paths)?);
        }
    }

    Ok(())
}

async fn init_config(force: bool, cli: &Cli) -> Result<()> {
    let path = config_path(cli);

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path).await?;
    info!(path = %path.display(), "Config written");
    println!("Wrote {}", path.display());

    Ok(())
}
