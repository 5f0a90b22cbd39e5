//! Crawl configuration
//!
//! The CLI surface is fixed to `<start_url> <depth>`, so everything else is
//! configured programmatically: the binary runs on the defaults below, and
//! library callers (including the integration tests) override fields as
//! needed.

use crate::CrawlError;
use std::path::PathBuf;
use std::time::Duration;

/// Browser-like identity sent with every outbound request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout applied to page and image fetches alike
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Base delay for linear retry backoff (attempt N waits N times this)
pub const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_secs(2);

/// Attempts per page fetch before giving up on the page
pub const DEFAULT_MAX_FETCH_ATTEMPTS: u32 = 3;

/// Upper bound on simultaneously in-flight network fetches
pub const DEFAULT_MAX_CONCURRENT_FETCHES: u32 = 32;

/// Directory (relative to the working directory) receiving images and the manifest
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// Crawler behavior configuration
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Maximum link depth to follow; the seed page is depth 1
    pub max_depth: u32,

    /// Timeout for each individual HTTP request
    pub fetch_timeout: Duration,

    /// Attempts per page fetch; image fetches always use a single attempt
    pub max_fetch_attempts: u32,

    /// Base delay between retries (attempt N sleeps N * base)
    pub retry_base_delay: Duration,

    /// Maximum number of concurrently in-flight fetches across the crawl
    pub max_concurrent_fetches: u32,

    /// Directory where images and the manifest are written
    pub output_dir: PathBuf,

    /// User-Agent header value for outbound requests
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: 1,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            max_fetch_attempts: DEFAULT_MAX_FETCH_ATTEMPTS,
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CrawlConfig {
    /// Validates the configuration before a crawl starts
    pub fn validate(&self) -> Result<(), CrawlError> {
        if self.max_fetch_attempts == 0 {
            return Err(CrawlError::Config(
                "max_fetch_attempts must be at least 1".to_string(),
            ));
        }

        if self.max_concurrent_fetches == 0 {
            return Err(CrawlError::Config(
                "max_concurrent_fetches must be at least 1".to_string(),
            ));
        }

        if self.user_agent.is_empty() {
            return Err(CrawlError::Config(
                "user_agent must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
