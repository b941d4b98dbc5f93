//! Search command - find items by name.

use anyhow::Result;
use clap::Args;

use super::api_client;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Item name (or part of it) in the configured locale.
    pub name: String,

    /// Result page, starting at 1.
    #[arg(long, short, default_value_t = 1)]
    pub page: u32,
}

/// Runs the search command.
pub async fn run(args: &SearchArgs, cli: &Cli) -> Result<()> {
    let name = args.name.trim();
    if name.is_empty() {
        anyhow::bail!("Search name must not be empty");
    }

    let (config, client) = api_client(cli)?;
    let page = client
        .search_items(name, args.page)
        .await?
        .to_page(&config.locale);

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_search_page(&page));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&page)?);
        }
    }

    Ok(())
}
