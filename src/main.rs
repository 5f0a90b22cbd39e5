//! Imgrake main entry point
//!
//! Command-line interface: `imgrake <start_url> <depth>`.

use anyhow::Context;
use clap::Parser;
use imgrake::config::CrawlConfig;
use imgrake::crawler::crawl;
use imgrake::manifest::{write_manifest, MANIFEST_FILE_NAME};
use tracing_subscriber::EnvFilter;

/// Imgrake: a depth-bounded image-harvesting crawler
///
/// Starting from the seed URL, imgrake follows links up to the given depth,
/// downloads every image it finds into `images/`, and writes an
/// `images/index.json` manifest describing each download.
#[derive(Parser, Debug)]
#[command(name = "imgrake")]
#[command(version = "1.0.0")]
#[command(about = "Crawl a site and harvest its images", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "START_URL")]
    start_url: String,

    /// Maximum link depth to follow (the seed page is depth 1)
    #[arg(value_name = "DEPTH")]
    depth: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Argument errors (wrong count, non-integer depth) exit with code 1
    // before any crawling begins.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    setup_logging();

    let config = CrawlConfig {
        max_depth: cli.depth,
        ..CrawlConfig::default()
    };
    let manifest_path = config.output_dir.join(MANIFEST_FILE_NAME);

    let report = crawl(&cli.start_url, config)
        .await
        .with_context(|| format!("crawl of {} failed", cli.start_url))?;

    write_manifest(&report.images, &manifest_path)
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    tracing::info!(
        "Saved {} with {} images ({} pages visited)",
        manifest_path.display(),
        report.images.len(),
        report.pages_visited
    );

    Ok(())
}

/// Sets up the tracing subscriber
///
/// The CLI carries no verbosity flags, so the filter comes from RUST_LOG
/// with a crate-scoped default.
fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("imgrake=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
