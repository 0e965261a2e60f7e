use std::collections::HashSet;
use std::sync::Mutex;

/// Process-scoped record of claimed URLs
///
/// The set is append-only for the duration of a run and keyed on the
/// absolute URL string exactly as produced by resolution. The lock is held
/// only for the in-memory check-and-insert, never across I/O.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Creates an empty visited set
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claims a URL for crawling
    ///
    /// Returns true and records the URL if it was not claimed before,
    /// false otherwise. A false return grants no crawl rights: the losing
    /// task must not produce a page for this URL.
    pub fn claim(&self, url: &str) -> bool {
        let mut urls = self.urls.lock().unwrap();
        urls.insert(url.to_string())
    }

    /// Returns the number of claimed URLs
    pub fn len(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    /// Returns true if no URL has been claimed yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_first_claim_succeeds() {
        let visited = VisitedSet::new();
        assert!(visited.claim("https://example.com/"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_second_claim_fails() {
        let visited = VisitedSet::new();
        assert!(visited.claim("https://example.com/"));
        assert!(!visited.claim("https://example.com/"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_distinct_urls_claim_independently() {
        let visited = VisitedSet::new();
        assert!(visited.claim("https://example.com/a"));
        assert!(visited.claim("https://example.com/b"));
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_no_normalization_beyond_resolution() {
        // Trailing-slash variants are distinct keys; the set stores
        // whatever resolution produced.
        let visited = VisitedSet::new();
        assert!(visited.claim("https://example.com/a"));
        assert!(visited.claim("https://example.com/a/"));
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_concurrent_claims_grant_exactly_one_winner() {
        let visited = Arc::new(VisitedSet::new());
        let mut handles = Vec::new();

        for _ in 0..16 {
            let visited = Arc::clone(&visited);
            handles.push(std::thread::spawn(move || {
                visited.claim("https://example.com/contested")
            }));
        }

        let winners: usize = handles
            .into_iter()
            .map(|h| h.join().unwrap() as usize)
            .sum();
        assert_eq!(winners, 1);
        assert_eq!(visited.len(), 1);
    }
}
