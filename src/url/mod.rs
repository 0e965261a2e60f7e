//! URL handling module for sitemapper
//!
//! This module provides host extraction, same-authority comparison, and
//! href resolution against an origin URL.

use url::Url;

/// Extracts the host from a URL
///
/// Retrieves the host portion of a URL and converts it to lowercase.
/// Returns None if the URL has no host (e.g. `mailto:` URLs).
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitemapper::url::extract_host;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns true if two URLs share the same authority
///
/// Authority here means host plus effective port, so that two servers on
/// the same host but different ports are never treated as the same site.
/// URLs without a host never match anything.
pub fn same_authority(a: &Url, b: &Url) -> bool {
    match (a.host_str(), b.host_str()) {
        (Some(ha), Some(hb)) => {
            ha.eq_ignore_ascii_case(hb) && a.port_or_known_default() == b.port_or_known_default()
        }
        _ => false,
    }
}

/// Resolves an href attribute value against an origin URL
///
/// Returns the absolute URL, or None if the href should be skipped:
/// - empty hrefs
/// - fragment-only hrefs (same-page anchors)
/// - hrefs that fail to resolve against the origin
///
/// Special schemes (`javascript:`, `mailto:`, `tel:`, `data:`) resolve to
/// URLs without a host, so the caller's same-authority check drops them.
pub fn resolve_href(origin: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    origin.join(href).ok()
}
