//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic:
//! - HTTP fetching
//! - Link extraction with same-host filtering
//! - The recursive, depth-bounded crawl orchestrator

mod extractor;
mod fetcher;
mod orchestrator;

pub use extractor::extract_links;
pub use fetcher::{build_http_client, fetch_page, FetchError};
pub use orchestrator::run_crawl;
