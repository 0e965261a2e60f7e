//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler: building the
//! shared client and fetching a single page body. There is no retry policy
//! and no manual redirect handling; the orchestrator uses whatever a
//! single request returns.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// User agent sent with every request
const USER_AGENT: &str = concat!("sitemapper/", env!("CARGO_PKG_VERSION"));

/// Why a page fetch failed
///
/// Fetch failures are page-local: the orchestrator records them on the
/// page and keeps crawling, so this error never propagates past it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),
}

/// Builds the HTTP client shared by all crawl tasks
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body
///
/// Transport errors and non-success status codes both count as fetch
/// failures; anything with a 2xx status yields its body regardless of
/// content type.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    Ok(response.text().await?)
}
