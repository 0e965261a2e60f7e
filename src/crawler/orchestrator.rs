//! Crawl orchestrator - recursive, depth-bounded, concurrency-fanning driver
//!
//! This module ties the crawler together:
//! - validating the start URL before any crawling begins
//! - fetching pages and claiming URLs exactly once per run
//! - recording pages in the shared sitemap
//! - spawning one concurrent child crawl per distinct discovered link and
//!   joining all children before returning

use crate::crawler::extractor::extract_links;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::state::{Page, SiteMap, SiteMapAggregator, VisitedSet};
use crate::{CrawlError, Result};
use futures::future::BoxFuture;
use reqwest::Client;
use std::sync::Arc;
use tokio::task::JoinSet;
use url::Url;

/// Shared state threaded through every recursive crawl call
///
/// `visited` and `sitemap` are the only mutable state shared across crawl
/// tasks; both guard themselves with coarse exclusive locks. The context
/// is explicit rather than global so separate runs cannot contaminate each
/// other.
struct CrawlContext {
    client: Client,
    visited: VisitedSet,
    sitemap: SiteMapAggregator,
}

/// Crawls a site and returns its sitemap
///
/// Fatal errors occur only before crawling starts: a missing start URL or
/// one that does not parse as an absolute URL with a host. Once crawling
/// begins, fetch failures are recorded on their page and resolution
/// failures are dropped; nothing aborts the run.
///
/// The returned sitemap covers the full depth-bounded subgraph reachable
/// from the start URL: this function only resolves once every spawned
/// crawl task has completed.
///
/// # Arguments
///
/// * `start_url` - The URL to start crawling from, if one was given
/// * `depth_limit` - Maximum number of link-hops from the start URL; a
///   page exactly at the limit is still crawled, only its children are cut
///
/// # Example
///
/// ```no_run
/// use sitemapper::crawler::run_crawl;
///
/// # async fn example() -> sitemapper::Result<()> {
/// let sitemap = run_crawl(Some("https://example.com/"), 2).await?;
/// println!("{} pages", sitemap.pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(start_url: Option<&str>, depth_limit: usize) -> Result<SiteMap> {
    let raw = start_url.ok_or(CrawlError::NoUrl)?;
    let target = Url::parse(raw).map_err(|_| CrawlError::InvalidUrl)?;
    if target.host_str().is_none() {
        return Err(CrawlError::InvalidUrl);
    }

    let ctx = Arc::new(CrawlContext {
        client: build_http_client()?,
        visited: VisitedSet::new(),
        sitemap: SiteMapAggregator::new(depth_limit),
    });

    crawl_page(Arc::clone(&ctx), target, 0).await;

    let sitemap = ctx.sitemap.snapshot();
    tracing::info!(
        "crawl complete: {} pages, truncated: {}",
        sitemap.pages.len(),
        sitemap.truncated
    );

    Ok(sitemap)
}

/// Crawls a single page and fans out to its distinct same-host links
///
/// The future is boxed because the function is recursive: each child link
/// spawns another `crawl_page` task, and the parent joins all of them
/// before returning, so no task outlives its caller.
///
/// The fetch deliberately happens before the claim. Two tasks racing on
/// the same URL may both fetch it, but only the claim winner records a
/// page and fans out; the loser discards its body. This trades a little
/// fetch efficiency for a simpler protocol.
fn crawl_page(ctx: Arc<CrawlContext>, url: Url, depth: usize) -> BoxFuture<'static, ()> {
    Box::pin(async move {
        if depth > ctx.sitemap.depth_limit() {
            tracing::debug!("not fetching {} as we are at depth {}", url, depth);
            ctx.sitemap.set_truncated();
            return;
        }

        tracing::debug!("fetching {}", url);
        let fetched = fetch_page(&ctx.client, &url).await;

        if !ctx.visited.claim(url.as_str()) {
            tracing::debug!("already crawled {}", url);
            return;
        }

        let body = match fetched {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("error fetching {}: {}", url, e);
                ctx.sitemap.append_page(Page::failed(url.to_string()));
                return;
            }
        };

        let links = extract_links(&body, &url);

        // Link keys were produced by resolution, so they always re-parse.
        let children_urls: Vec<Url> = links.keys().filter_map(|k| Url::parse(k).ok()).collect();

        ctx.sitemap.append_page(Page::new(url.to_string(), links));

        // One child per distinct link; occurrence counts do not multiply
        // the fan-out.
        let mut children = JoinSet::new();
        for child in children_urls {
            children.spawn(crawl_page(Arc::clone(&ctx), child, depth + 1));
        }
        while children.join_next().await.is_some() {}
    })
}
