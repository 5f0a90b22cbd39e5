//! Imgrake: a depth-bounded image-harvesting web crawler
//!
//! Starting from a seed URL, imgrake follows hyperlinks up to a configured
//! depth, downloads every image referenced on each visited page, and records
//! a JSON manifest describing each downloaded image.

pub mod config;
pub mod crawler;
pub mod manifest;
pub mod url;

use thiserror::Error;

/// Main error type for imgrake operations
///
/// Per-page and per-image failures (transport errors, unresolvable
/// references, non-HTML responses) are logged local skips and never surface
/// here; this type covers the conditions that make a crawl impossible to
/// start or its output impossible to persist.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Malformed URL `{url}`: {source}")]
    Parse {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Cannot resolve `{reference}` against `{base}`: {source}")]
    Resolve {
        reference: String,
        base: String,
        source: ::url::ParseError,
    },
}

/// Result type alias for imgrake operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{crawl, CrawlReport};
pub use manifest::{write_manifest, ImageRecord, Manifest};
