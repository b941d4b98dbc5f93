//! Token command - request an access token.

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::api_client;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the token command.
#[derive(Args)]
pub struct TokenArgs {
    /// Print the full bearer string instead of a masked prefix.
    #[arg(long)]
    pub reveal: bool,
}

/// Runs the token command.
pub async fn run(args: &TokenArgs, cli: &Cli) -> Result<()> {
    let (config, client) = api_client(cli)?;
    info!(host = %config.token_host(), "Requesting access token");

    let token = client.tokens().get_token().await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_token(&token, args.reveal));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_token(&token, args.reveal)?);
        }
    }

    Ok(())
}
