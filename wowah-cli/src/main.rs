// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! wowah CLI - World of Warcraft auction-house data from the command line.
//!
//! # Examples
//!
//! ```bash
//! # List connected realms of the configured region
//! wowah realms
//!
//! # Auctions of a connected realm, with item names resolved
//! wowah auctions 205 --enrich --limit 50
//!
//! # Cheapest listings of one item
//! wowah auctions 205 --item 2589
//!
//! # Resolve item ids
//! wowah enrich 2589 2592 19019
//!
//! # JSON output
//! wowah --format json --pretty search "리넨"
//!
//! # Run the HTTP API
//! wowah serve --bind 0.0.0.0:3000
//! ```

mod commands;
mod output;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wowah_blizzard::{BlizzardError, ItemFetchError};
use wowah_fetch::AuthError;
use wowah_store::StoreError;

use commands::{auctions, classes, config, items, realms, search, serve, token};

// ============================================================================
// CLI Definition
// ============================================================================

/// wowah CLI - World of Warcraft auction-house data.
#[derive(Parser)]
#[command(name = "wowah")]
#[command(about = "World of Warcraft auction-house data from the Blizzard Game Data API")]
#[command(long_about = r#"
wowah talks to the Blizzard Game Data API with OAuth client credentials,
lists connected realms and auction houses, and resolves auction item ids to
localized names. Item documents are cached on disk, one file per item.

Credentials come from the config file or the CLIENT_ID / CLIENT_SECRET
environment variables. REGION and LOCALE select the API region (default kr)
and the name locale (default ko_KR).

Examples:
  wowah realms                      # Connected realm ids
  wowah auctions 205 --enrich       # Auctions with item names
  wowah enrich 2589 2592            # Resolve item ids
  wowah serve                       # HTTP API on 127.0.0.1:3000
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Config file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no logging, no error message).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Request an access token and show when it expires.
    Token(token::TokenArgs),

    /// List connected realm ids.
    Realms,

    /// Show one connected realm.
    Realm(realms::RealmArgs),

    /// Show the auction house of a connected realm.
    #[command(visible_alias = "a")]
    Auctions(auctions::AuctionsArgs),

    /// Show one item.
    Item(items::ItemArgs),

    /// Resolve item ids to names and classes.
    #[command(visible_alias = "e")]
    Enrich(items::EnrichArgs),

    /// Search items by name.
    #[command(visible_alias = "s")]
    Search(search::SearchArgs),

    /// List item classes, or the subclasses of one class.
    Classes(classes::ClassesArgs),

    /// Run the HTTP API.
    Serve(serve::ServeArgs),

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Invalid or incomplete configuration.
    Config = 2,
    /// No access token could be obtained.
    Auth = 3,
}

impl ExitCode {
    fn for_error(err: &anyhow::Error) -> Self {
        if let Some(StoreError::Config(_)) = err.downcast_ref::<StoreError>() {
            return Self::Config;
        }
        if err.downcast_ref::<AuthError>().is_some() {
            return Self::Auth;
        }
        if let Some(BlizzardError::Auth(_)) = err.downcast_ref::<BlizzardError>() {
            return Self::Auth;
        }
        if let Some(ItemFetchError::Auth(_)) = err.downcast_ref::<ItemFetchError>() {
            return Self::Auth;
        }
        Self::Error
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool, default_filter: &str) {
    if quiet {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("wowah=debug,info")
        } else {
            EnvFilter::new(default_filter)
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Commands::Serve(_) => "wowah=info",
        _ => "wowah=warn",
    };
    setup_logging(cli.verbose, cli.quiet, default_filter);

    let result: Result<()> = match &cli.command {
        Commands::Token(args) => token::run(args, &cli).await,
        Commands::Realms => realms::run_list(&cli).await,
        Commands::Realm(args) => realms::run_detail(args, &cli).await,
        Commands::Auctions(args) => auctions::run(args, &cli).await,
        Commands::Item(args) => items::run_item(args, &cli).await,
        Commands::Enrich(args) => items::run_enrich(args, &cli).await,
        Commands::Search(args) => search::run(args, &cli).await,
        Commands::Classes(args) => classes::run(args, &cli).await,
        Commands::Serve(args) => serve::run(args, &cli).await,
        Commands::Config(args) => config::run(args, &cli).await,
    };

    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e:#}");
            }
            ExitCode::for_error(&e)
        }
    };
    std::process::exit(code as i32);
}
