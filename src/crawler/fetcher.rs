//! HTTP fetcher with retry and linear backoff
//!
//! All network traffic goes through here: page fetches use the full retry
//! policy, image fetches use a single attempt. Only transport-level failures
//! (timeout, DNS, connection reset, a body cut off mid-stream) are retried;
//! any HTTP status that reaches the client counts as a successful fetch and
//! is never special-cased.

use crate::config::CrawlConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// A response reached the client, whatever its status code
    Success {
        /// HTTP status code
        status: u16,
        /// Content-Type header value, if present
        content_type: Option<String>,
        /// Raw response body
        body: Vec<u8>,
    },

    /// No response after exhausting the attempt budget
    Failure {
        /// Description of the last transport error
        reason: String,
    },
}

/// Builds the HTTP client shared by every fetch in a crawl
///
/// The client carries the browser-like user agent and the per-request
/// timeout; redirects follow reqwest's default policy.
pub fn build_http_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.fetch_timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, retrying transport failures with linear backoff
///
/// Attempt N that fails sleeps `N * base_delay` before the next try.
/// The first response to reach the client short-circuits the remaining
/// attempts. After `max_attempts` consecutive transport failures the fetch
/// gives up and returns `Failure` with the last error.
pub async fn fetch_with_retry(
    client: &Client,
    url: &Url,
    max_attempts: u32,
    base_delay: Duration,
) -> FetchOutcome {
    let mut last_error = String::new();

    for attempt in 1..=max_attempts.max(1) {
        match attempt_fetch(client, url).await {
            Ok(outcome) => return outcome,
            Err(reason) => {
                tracing::warn!(
                    "Attempt {}/{} failed to fetch {}: {}",
                    attempt,
                    max_attempts,
                    url,
                    reason
                );
                last_error = reason;
                if attempt < max_attempts {
                    tokio::time::sleep(base_delay * attempt).await;
                }
            }
        }
    }

    FetchOutcome::Failure { reason: last_error }
}

/// Fetches a URL with a single attempt, no retry
///
/// Image downloads use this; the retry policy is reserved for pages.
pub async fn fetch_once(client: &Client, url: &Url) -> FetchOutcome {
    match attempt_fetch(client, url).await {
        Ok(outcome) => outcome,
        Err(reason) => FetchOutcome::Failure { reason },
    }
}

/// One GET attempt; Err is a retryable transport failure
async fn attempt_fetch(client: &Client, url: &Url) -> Result<FetchOutcome, String> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(describe_error)?;

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    // A body that dies mid-stream is a transport failure like any other
    let body = response.bytes().await.map_err(describe_error)?.to_vec();

    Ok(FetchOutcome::Success {
        status,
        content_type,
        body,
    })
}

/// Classifies a reqwest error into a short, loggable description
fn describe_error(error: reqwest::Error) -> String {
    if error.is_timeout() {
        "request timeout".to_string()
    } else if error.is_connect() {
        "connection failed".to_string()
    } else if error.is_builder() {
        format!("unsupported request: {}", error)
    } else {
        error.to_string()
    }
}
