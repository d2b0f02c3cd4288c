//! Scrape the weekly dining menu page into the CSV artifact the API reads.
//!
//! Exits non-zero (writing nothing) when the page lacks the menu container.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use menu_core::domains::menu::extraction::{MenuExtractor, MenuLayout, MenuPageFetcher};
use menu_core::domains::menu::store::MenuStore;
use scraper::Html;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "extract_menu")]
#[command(about = "Extract the weekly dining menu into a CSV file")]
#[command(group(ArgGroup::new("source").required(true).args(["input", "url"])))]
struct Cli {
    /// Saved HTML page to read
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Menu page URL to fetch
    #[arg(long)]
    url: Option<String>,

    /// CSV file to (over)write
    #[arg(long, short, default_value = "menu2.csv")]
    output: PathBuf,

    /// Selector for the container holding one block per day
    #[arg(long)]
    container: Option<String>,

    /// Class marking a recipe list item
    #[arg(long)]
    trigger_class: Option<String>,
}

impl Cli {
    fn layout(&self) -> MenuLayout {
        let defaults = MenuLayout::default();
        MenuLayout {
            container: self.container.clone().unwrap_or(defaults.container),
            trigger_class: self.trigger_class.clone().unwrap_or(defaults.trigger_class),
            ..MenuLayout::default()
        }
    }

    async fn read_page(&self) -> Result<String> {
        match (&self.input, &self.url) {
            (Some(path), _) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display())),
            (None, Some(url)) => MenuPageFetcher::new()?.fetch(url).await,
            (None, None) => anyhow::bail!("either --input or --url is required"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,menu_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let html = cli.read_page().await?;

    let extractor = MenuExtractor::new(cli.layout()).context("Invalid menu layout")?;
    let document = Html::parse_document(&html);
    let entries: Vec<_> = extractor
        .extract(&document)
        .context("Could not find the menu tab container")?
        .collect();

    let store = MenuStore::new(cli.output.clone());
    let rows = store
        .save(entries)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    tracing::info!(rows, output = %cli.output.display(), "Extraction complete");
    println!("✓ Extracted {} meal blocks → {}", rows, cli.output.display());

    Ok(())
}
