//! Crawler module: fetching, parsing, traversal, and image downloading
//!
//! The traversal engine drives everything: it deduplicates against the
//! shared visited set, fetches pages with retry, extracts image and link
//! references, fans out downloads and child pages concurrently, and joins
//! them before completing.

mod fetcher;
mod images;
mod parser;
mod traverse;

pub use fetcher::{build_http_client, fetch_once, fetch_with_retry, FetchOutcome};
pub use images::{image_file_name, FALLBACK_IMAGE_NAME};
pub use parser::{extract_page_refs, PageRefs};

use crate::config::CrawlConfig;
use crate::manifest::ImageRecord;
use crate::url::parse_absolute;
use crate::Result;
use std::sync::Arc;
use traverse::CrawlContext;

/// Outcome of a completed crawl
#[derive(Debug)]
pub struct CrawlReport {
    /// Number of distinct URLs claimed by the traversal
    pub pages_visited: usize,

    /// One record per downloaded image, in completion order
    pub images: Vec<ImageRecord>,
}

/// Runs a complete crawl from a seed URL
///
/// Creates the output directory, visits the seed at depth 1, and returns
/// once every transitively spawned task has completed. Individual page and
/// image failures never abort the crawl; only an invalid configuration, an
/// unparsable seed, or an unusable output directory produce an error.
pub async fn crawl(start_url: &str, config: CrawlConfig) -> Result<CrawlReport> {
    config.validate()?;

    let seed = parse_absolute(start_url)?;
    let client = build_http_client(&config)?;

    tokio::fs::create_dir_all(&config.output_dir).await?;

    let ctx = Arc::new(CrawlContext::new(config, client));
    traverse::visit_page(Arc::clone(&ctx), seed, 1).await;

    Ok(CrawlReport {
        pages_visited: ctx.visited_count(),
        images: ctx.manifest.drain(),
    })
}
