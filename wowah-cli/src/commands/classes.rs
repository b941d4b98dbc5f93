//! Classes command - item class index and subclasses.

use anyhow::Result;
use clap::Args;

use super::api_client;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the classes command.
#[derive(Args)]
pub struct ClassesArgs {
    /// Show the subclasses of this class instead of the index.
    #[arg(long = "class", value_name = "ID")]
    pub class_id: Option<u32>,
}

/// Runs the classes command.
pub async fn run(args: &ClassesArgs, cli: &Cli) -> Result<()> {
    let (config, client) = api_client(cli)?;
    let text = TextFormatter::new(!cli.no_color);
    let json = JsonFormatter::new(cli.pretty);

    if let Some(id) = args.class_id {
        let class = client.item_class(id).await?;
        match cli.format {
            OutputFormat::Text => println!("{}", text.format_class(&class, &config.locale)),
            OutputFormat::Json => println!("{}", json.format(&class)?),
        }
        return Ok(());
    }

    let classes = client.item_classes().await?.summaries(&config.locale);
    match cli.format {
        OutputFormat::Text => println!("{}", text.format_classes(&classes)),
        OutputFormat::Json => println!("{}", json.format(&classes)?),
    }

    Ok(())
}
