//! Shared crawl state
//!
//! This module holds the two pieces of mutable state shared across crawl
//! tasks, both behind coarse exclusive locks:
//!
//! - `VisitedSet`: process-scoped record of claimed URLs
//! - `SiteMapAggregator`: the result collection (pages + truncation flag)

mod sitemap;
mod visited;

// Re-export main types
pub use sitemap::{Page, SiteMap, SiteMapAggregator};
pub use visited::VisitedSet;
