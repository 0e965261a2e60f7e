//! Sitemapper: a single-site concurrent sitemap crawler
//!
//! This crate crawls one website starting from a given URL, following
//! same-host links up to a configured depth, and produces a sitemap: for
//! each visited page, the same-host links it contains with occurrence
//! counts, whether fetching it failed, and whether the crawl was cut short
//! by the depth bound.

pub mod crawler;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for sitemapper operations
///
/// Only startup conditions are fatal. Once crawling begins, every failure
/// degrades into the recorded result: fetch errors are recorded on the
/// page, link-resolution errors are dropped.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("no URL specified")]
    NoUrl,

    #[error("invalid URL")]
    InvalidUrl,

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type alias for sitemapper operations
pub type Result<T> = std::result::Result<T, CrawlError>;

// Re-export commonly used types
pub use crawler::{extract_links, run_crawl};
pub use state::{Page, SiteMap, SiteMapAggregator, VisitedSet};
