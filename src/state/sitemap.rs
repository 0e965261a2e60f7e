use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// A single crawled page
///
/// Created once per claimed URL and immutable afterwards. `links` maps
/// each same-host URL found on the page to its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub url: String,
    pub links: HashMap<String, usize>,
    pub fetch_failed: bool,
}

impl Page {
    /// Creates a successfully fetched page with its extracted links
    pub fn new(url: String, links: HashMap<String, usize>) -> Self {
        Self {
            url,
            links,
            fetch_failed: false,
        }
    }

    /// Creates a page whose fetch failed; it carries no links
    pub fn failed(url: String) -> Self {
        Self {
            url,
            links: HashMap::new(),
            fetch_failed: true,
        }
    }
}

/// The final crawl result
///
/// `depth` is the configured depth limit for the run; `truncated` is true
/// iff at least one discovered link was not explored because it lay one
/// hop beyond that limit. No ordering among pages is promised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMap {
    pub pages: Vec<Page>,
    pub depth: usize,
    pub truncated: bool,
}

impl SiteMap {
    /// Looks up a page by URL
    pub fn page(&self, url: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.url == url)
    }
}

/// Shared, lock-guarded sitemap under construction
///
/// Appends and flag sets arrive from arbitrarily many concurrent crawl
/// tasks. Guarantees only that every claimed, fetched URL produces exactly
/// one page; append order is whatever the scheduler produced.
#[derive(Debug)]
pub struct SiteMapAggregator {
    depth_limit: usize,
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    pages: Vec<Page>,
    truncated: bool,
}

impl SiteMapAggregator {
    /// Creates an empty aggregator for a run with the given depth limit
    pub fn new(depth_limit: usize) -> Self {
        Self {
            depth_limit,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// The depth limit this run was configured with
    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    /// Appends a finished page to the sitemap
    pub fn append_page(&self, page: Page) {
        self.inner.lock().unwrap().pages.push(page);
    }

    /// Marks the crawl as truncated by the depth bound
    pub fn set_truncated(&self) {
        self.inner.lock().unwrap().truncated = true;
    }

    /// Returns the sitemap accumulated so far
    pub fn snapshot(&self) -> SiteMap {
        let inner = self.inner.lock().unwrap();
        SiteMap {
            pages: inner.pages.clone(),
            depth: self.depth_limit,
            truncated: inner.truncated,
        }
    }
}
