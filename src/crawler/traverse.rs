//! Traversal engine: recursive, depth-bounded, deduplicated page visiting
//!
//! Each page is one task: fetch, verify HTML, download all of its images,
//! then recurse into its links at depth + 1. Image downloads and child pages
//! fan out concurrently; a page completes only once every download it
//! triggered and every link subtree it spawned has completed, so the root
//! call returning means the whole crawl has joined.

use crate::config::CrawlConfig;
use crate::crawler::fetcher::{fetch_with_retry, FetchOutcome};
use crate::crawler::images::download_image;
use crate::crawler::parser::extract_page_refs;
use crate::manifest::ManifestLog;
use crate::url::{is_followable, resolve_reference};
use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// Shared state threaded through every task of one crawl run
pub(crate) struct CrawlContext {
    pub config: CrawlConfig,
    pub client: Client,
    pub manifest: ManifestLog,
    /// Bounds simultaneously in-flight fetches across pages and images.
    /// Permits are held only for the duration of a single request, never
    /// across child joins, so the bound cannot deadlock the recursion.
    pub fetch_permits: Semaphore,
    visited: Mutex<HashSet<String>>,
}

impl CrawlContext {
    pub fn new(config: CrawlConfig, client: Client) -> Self {
        let permits = config.max_concurrent_fetches as usize;

        Self {
            config,
            client,
            manifest: ManifestLog::default(),
            fetch_permits: Semaphore::new(permits),
            visited: Mutex::new(HashSet::new()),
        }
    }

    /// Atomically claims a URL for visiting
    ///
    /// Returns true exactly once per URL; the insert under the lock is the
    /// sole serialization point keeping concurrent tasks from both crawling
    /// the same page.
    pub fn mark_visited(&self, url: &str) -> bool {
        self.visited.lock().unwrap().insert(url.to_string())
    }

    /// Number of URLs claimed so far
    pub fn visited_count(&self) -> usize {
        self.visited.lock().unwrap().len()
    }
}

/// Visits one page and, transitively, everything reachable under the depth limit
///
/// Boxed because the future recurses through itself via [`JoinSet::spawn`].
/// Never returns an error: every failure on this path is a logged local
/// skip, and the crawl as a whole cannot abort early.
pub(crate) fn visit_page(ctx: Arc<CrawlContext>, url: Url, depth: u32) -> BoxFuture<'static, ()> {
    async move {
        if depth > ctx.config.max_depth {
            return;
        }

        if !ctx.mark_visited(url.as_str()) {
            tracing::debug!("Already visited, skipping: {}", url);
            return;
        }

        tracing::info!("Crawling (depth {}): {}", depth, url);

        let outcome = {
            // acquire() only errors after close, which never happens here
            let _permit = ctx.fetch_permits.acquire().await.unwrap();
            fetch_with_retry(
                &ctx.client,
                &url,
                ctx.config.max_fetch_attempts,
                ctx.config.retry_base_delay,
            )
            .await
        };

        let (content_type, body) = match outcome {
            FetchOutcome::Success {
                content_type, body, ..
            } => (content_type, body),
            FetchOutcome::Failure { reason } => {
                tracing::warn!("Giving up on {}: {}", url, reason);
                return;
            }
        };

        // Links can point at binary resources; reaching one is expected, not an error
        if !content_type.map_or(false, |ct| ct.contains("text/html")) {
            tracing::debug!("Skipping non-HTML content at {}", url);
            return;
        }

        let refs = extract_page_refs(&String::from_utf8_lossy(&body));

        // Download every image on this page; the page does not advance until
        // all of its own downloads complete, but sibling pages are unaffected.
        let mut downloads = JoinSet::new();
        for src in refs.image_sources {
            match resolve_reference(&src, &url) {
                Ok(img_url) => {
                    downloads.spawn(download_image(Arc::clone(&ctx), img_url, url.clone(), depth));
                }
                Err(error) => {
                    tracing::warn!("Invalid image URL on {}: {}", url, error);
                }
            }
        }
        while let Some(joined) = downloads.join_next().await {
            if let Err(error) = joined {
                tracing::error!("Image download task failed: {}", error);
            }
        }

        if depth < ctx.config.max_depth {
            let mut children = JoinSet::new();
            for href in refs.link_targets {
                match resolve_reference(&href, &url) {
                    Ok(next) if is_followable(&next) => {
                        children.spawn(visit_page(Arc::clone(&ctx), next, depth + 1));
                    }
                    Ok(next) => {
                        tracing::debug!("Skipping non-HTTP link: {}", next);
                    }
                    Err(error) => {
                        tracing::warn!("Invalid link on {}: {}", url, error);
                    }
                }
            }
            while let Some(joined) = children.join_next().await {
                if let Err(error) = joined {
                    tracing::error!("Page task failed: {}", error);
                }
            }
        }
    }
    .boxed()
}
