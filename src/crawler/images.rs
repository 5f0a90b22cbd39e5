//! Image downloading and filename derivation
//!
//! Downloads are fire-and-forget from the traversal's point of view: a
//! failure is logged and the record is simply not appended. Unlike pages,
//! an image gets exactly one fetch attempt.

use crate::crawler::fetcher::{fetch_once, FetchOutcome};
use crate::crawler::traverse::CrawlContext;
use crate::manifest::ImageRecord;
use md5::{Digest, Md5};
use std::path::Path;
use std::sync::Arc;
use url::Url;

/// Stored-file basename used when the URL path has none
pub const FALLBACK_IMAGE_NAME: &str = "image.jpg";

/// Derives the stored filename for an image URL
///
/// `<md5-hex-of-url>_<basename>`: the digest prefix keeps distinct source
/// URLs from colliding on a shared basename, while the same URL always maps
/// to the same name, so re-runs overwrite instead of duplicating.
pub fn image_file_name(url: &Url) -> String {
    let base = Path::new(url.path())
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_IMAGE_NAME);

    let digest = Md5::digest(url.as_str().as_bytes());

    format!("{}_{}", hex::encode(digest), base)
}

/// Fetches one image, persists it, and appends its manifest record
///
/// Network and filesystem failures are logged per-image skips; nothing
/// propagates to the page that dispatched the download.
pub(crate) async fn download_image(
    ctx: Arc<CrawlContext>,
    img_url: Url,
    page_url: Url,
    depth: u32,
) {
    let outcome = {
        // acquire() only errors after close, which never happens here
        let _permit = ctx.fetch_permits.acquire().await.unwrap();
        fetch_once(&ctx.client, &img_url).await
    };

    let body = match outcome {
        FetchOutcome::Success { body, .. } => body,
        FetchOutcome::Failure { reason } => {
            tracing::warn!("Failed to download image {}: {}", img_url, reason);
            return;
        }
    };

    let file_name = image_file_name(&img_url);
    let dest = ctx.config.output_dir.join(&file_name);

    if let Err(error) = tokio::fs::write(&dest, &body).await {
        tracing::warn!("Failed to write {}: {}", dest.display(), error);
        return;
    }

    tracing::info!("Downloaded: {} -> {}", img_url, dest.display());

    ctx.manifest.record(ImageRecord {
        url: img_url.to_string(),
        page: page_url.to_string(),
        depth,
    });
}
