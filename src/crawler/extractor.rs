//! Link extractor: anchors to same-host occurrence counts
//!
//! This module turns a page body into the mapping of same-host link URLs
//! to how many times each occurs on the page.

use crate::url::{resolve_href, same_authority};
use scraper::{Html, Selector};
use std::collections::HashMap;
use url::Url;

/// Extracts same-host links with occurrence counts from an HTML body
///
/// # Extraction rules
///
/// - Every `<a href="...">` is considered; other elements carrying URLs
///   (scripts, stylesheets, images) are not.
/// - Each href is resolved against the origin URL; hrefs that fail to
///   resolve are silently skipped.
/// - A resolved URL on the origin's authority (host and effective port)
///   increments its counter; cross-host links are dropped.
/// - Malformed markup simply yields whatever was accumulated; this
///   function never fails and is idempotent over its input.
///
/// # Arguments
///
/// * `html` - The page body
/// * `origin` - The URL the body was fetched from, used both to resolve
///   relative hrefs and as the same-host reference
///
/// # Example
///
/// ```
/// use url::Url;
/// use sitemapper::crawler::extract_links;
///
/// let origin = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(r#"<a href="/blog">blog</a>"#, &origin);
/// assert_eq!(links.get("https://example.com/blog"), Some(&1));
/// ```
pub fn extract_links(html: &str, origin: &Url) -> HashMap<String, usize> {
    let mut links = HashMap::new();

    let document = Html::parse_document(html);
    let anchor = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return links,
    };

    for element in document.select(&anchor) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(resolved) = resolve_href(origin, href) else {
            continue;
        };

        if same_authority(&resolved, origin) {
            *links.entry(resolved.to_string()).or_insert(0) += 1;
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    #[test]
    fn test_relative_link_resolved_and_counted() {
        let links = extract_links(r#"<html><body><a href="/blog">Link</a></body></html>"#, &origin());
        assert_eq!(links.len(), 1);
        assert_eq!(links.get("https://example.com/blog"), Some(&1));
    }

    #[test]
    fn test_same_host_absolute_link() {
        let links = extract_links(
            r#"<a href="https://example.com/about">About</a>"#,
            &origin(),
        );
        assert_eq!(links.get("https://example.com/about"), Some(&1));
    }

    #[test]
    fn test_cross_host_link_dropped() {
        let links = extract_links(
            r#"<a href="/blog">a</a><a href="https://twitter.com/">b</a><a href="https://github.com/">c</a>"#,
            &origin(),
        );
        assert_eq!(links.len(), 1);
        assert!(links.contains_key("https://example.com/blog"));
    }

    #[test]
    fn test_duplicate_link_counted() {
        let links = extract_links(
            r#"<a href="/blog">one</a><a href="/blog">two</a>"#,
            &origin(),
        );
        assert_eq!(links.len(), 1);
        assert_eq!(links.get("https://example.com/blog"), Some(&2));
    }

    #[test]
    fn test_no_anchors_yields_empty_map() {
        let links = extract_links("<html><body><p>A paragraph</p></body></html>", &origin());
        assert!(links.is_empty());
    }

    #[test]
    fn test_special_schemes_dropped() {
        let links = extract_links(
            r#"<a href="javascript:void(0)">a</a>
               <a href="mailto:test@example.com">b</a>
               <a href="tel:+1234567890">c</a>"#,
            &origin(),
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_fragment_only_href_skipped() {
        let links = extract_links(r##"<a href="#section">Jump</a>"##, &origin());
        assert!(links.is_empty());
    }

    #[test]
    fn test_malformed_markup_returns_accumulated() {
        let links = extract_links(
            r#"<html><body><a href="/ok">ok</a><a href="/also-ok""#,
            &origin(),
        );
        assert!(links.contains_key("https://example.com/ok"));
    }

    #[test]
    fn test_different_port_is_cross_host() {
        let origin = Url::parse("http://127.0.0.1:8001/").unwrap();
        let links = extract_links(r#"<a href="http://127.0.0.1:8002/">other</a>"#, &origin);
        assert!(links.is_empty());
    }

    #[test]
    fn test_idempotent_over_identical_input() {
        let html = r#"<a href="/a">a</a><a href="/b">b</a><a href="/a">a</a>"#;
        let first = extract_links(html, &origin());
        let second = extract_links(html, &origin());
        assert_eq!(first, second);
        assert_eq!(first.get("https://example.com/a"), Some(&2));
    }
}
