//! Item commands - single item lookup and batch enrichment.

use anyhow::{Context, Result};
use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, info};
use wowah_blizzard::ItemEnrichmentPipeline;
use wowah_core::{ItemBatchRequest, ItemRecord};

use super::api_client;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the item command.
#[derive(Args)]
pub struct ItemArgs {
    /// Item id.
    pub id: u64,
}

/// Arguments for the enrich command.
#[derive(Args)]
pub struct EnrichArgs {
    /// Item ids to resolve.
    #[arg(required_unless_present = "auctions_file")]
    pub ids: Vec<u64>,

    /// Read ids from a JSON file shaped like `{"auctions": [{"item": {"id": ..}}]}`.
    #[arg(long, value_name = "PATH", conflicts_with = "ids")]
    pub auctions_file: Option<PathBuf>,
}

/// Shows one item, from the cache when possible.
pub async fn run_item(args: &ItemArgs, cli: &Cli) -> Result<()> {
    let (config, client) = api_client(cli)?;
    let pipeline = ItemEnrichmentPipeline::from_config(client, &config);

    let (raw, source) = pipeline.item_lookup(args.id).await?;
    debug!(id = args.id, ?source, "Item loaded");

    match cli.format {
        OutputFormat::Text => {
            let record = ItemRecord::from_raw(args.id, &raw, &config.locale, source);
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_records(&[record]));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&raw)?);
        }
    }

    Ok(())
}

/// Resolves a batch of item ids.
pub async fn run_enrich(args: &EnrichArgs, cli: &Cli) -> Result<()> {
    let ids = batch_ids(args).await?;
    let (config, client) = api_client(cli)?;
    let pipeline = ItemEnrichmentPipeline::from_config(client, &config);

    info!(count = ids.len(), "Resolving items");
    let records = pipeline.resolve_items(ids).await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_records(&records));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&records)?);
        }
    }

    Ok(())
}

async fn batch_ids(args: &EnrichArgs) -> Result<BTreeSet<u64>> {
    let Some(path) = &args.auctions_file else {
        return Ok(args.ids.iter().copied().filter(|id| *id != 0).collect());
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let request: ItemBatchRequest = serde_json::from_str(&content)
        .with_context(|| format!("{} is not an auctions batch", path.display()))?;
    Ok(request.item_ids())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_from_arguments() {
        let args = EnrichArgs {
            ids: vec![5, 0, 3, 5],
            auctions_file: None,
        };
        let ids: Vec<u64> = batch_ids(&args).await.unwrap().into_iter().collect();
        assert_eq!(ids, vec![3, 5]);
    }

    #[tokio::test]
    async fn test_ids_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auctions.json");
        std::fs::write(
            &path,
            r#"{"auctions":[{"id":1,"item":{"id":2589},"quantity":5},{"item":{"id":2592}},{"item":{}}]}"#,
        )
        .unwrap();

        let args = EnrichArgs {
            ids: Vec::new(),
            auctions_file: Some(path),
        };
        let ids: Vec<u64> = batch_ids(&args).await.unwrap().into_iter().collect();
        assert_eq!(ids, vec![2589, 2592]);
    }

    #[tokio::test]
    async fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auctions.json");
        std::fs::write(&path, r#"{"auctions": 3}"#).unwrap();

        let args = EnrichArgs {
            ids: Vec::new(),
            auctions_file: Some(path),
        };
        assert!(batch_ids(&args).await.is_err());
    }
}
