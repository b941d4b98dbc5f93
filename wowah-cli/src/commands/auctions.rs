//! Auctions command - auction house of a connected realm.

use anyhow::Result;
use clap::Args;
use std::collections::HashMap;
use tracing::info;
use wowah_blizzard::ItemEnrichmentPipeline;
use wowah_core::{Auction, ItemRecord};

use super::api_client;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the auctions command.
#[derive(Args)]
pub struct AuctionsArgs {
    /// Connected realm id.
    pub realm: u32,

    /// Maximum number of auctions to show (0 shows all).
    #[arg(long, short, default_value_t = 25)]
    pub limit: usize,

    /// Resolve item names for the shown auctions.
    #[arg(long)]
    pub enrich: bool,

    /// Only auctions of this item, cheapest unit price first.
    #[arg(long, value_name = "ID")]
    pub item: Option<u64>,
}

/// Runs the auctions command.
pub async fn run(args: &AuctionsArgs, cli: &Cli) -> Result<()> {
    let (config, client) = api_client(cli)?;
    let listing = client.auctions(args.realm).await?;
    let auctions = match args.item {
        Some(item_id) => listing.for_item(item_id),
        None => listing.auctions,
    };
    let total = auctions.len();

    let shown = shown_auctions(&auctions, args.limit);

    let items: HashMap<u64, ItemRecord> = if args.enrich {
        let pipeline = ItemEnrichmentPipeline::from_config(client.clone(), &config);
        let ids = shown.iter().map(|a| a.item.id);
        info!(auctions = shown.len(), "Enriching auctions");
        pipeline
            .resolve_items(ids)
            .await?
            .into_iter()
            .map(|record| (record.id, record))
            .collect()
    } else {
        HashMap::new()
    };

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_auctions_header());
            for auction in shown {
                let name = items.get(&auction.item.id).map(|r| r.name.as_str());
                println!("{}", formatter.format_auction_line(auction, name));
            }
            if shown.len() < total {
                println!();
                println!("Showing {} of {} auctions", shown.len(), total);
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_auctions(shown, &items)?);
        }
    }

    Ok(())
}

fn shown_auctions(auctions: &[Auction], limit: usize) -> &[Auction] {
    if limit == 0 || limit >= auctions.len() {
        auctions
    } else {
        &auctions[..limit]
    }
}
