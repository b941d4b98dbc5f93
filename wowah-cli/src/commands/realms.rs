//! Realm commands - connected realm index and detail.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::api_client;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the realm command.
#[derive(Args)]
pub struct RealmArgs {
    /// Connected realm id.
    pub id: u32,
}

/// Lists connected realm ids.
pub async fn run_list(cli: &Cli) -> Result<()> {
    let (_, client) = api_client(cli)?;
    let ids = client.connected_realm_ids().await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_realm_ids(&ids));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&json!({ "connectedRealmIds": ids }))?);
        }
    }

    Ok(())
}

/// Shows one connected realm.
pub async fn run_detail(args: &RealmArgs, cli: &Cli) -> Result<()> {
    let (config, client) = api_client(cli)?;
    let realm = client.connected_realm(args.id).await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_realm(&realm, &config.locale));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&realm)?);
        }
    }

    Ok(())
}
