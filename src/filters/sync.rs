use super::query::{from_pairs, to_href, to_pairs, QueryPairs, PARAM_SELECTED};
use super::types::FilterState;

/// Keeps the URL query string a projection of `FilterState`.
///
/// State is the authority. `observe` reads the URL into state (initial load or an
/// external URL change); `write` projects state back and returns the replacement URL
/// only when it differs from the current one. Writing the same state twice yields
/// `None` the second time, which breaks the state -> URL -> state cycle.
#[derive(Debug, Clone)]
pub struct UrlSync {
    path: String,
    current: QueryPairs,
}

impl UrlSync {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            current: QueryPairs::new(),
        }
    }

    /// Records an externally observed URL and re-initializes state from it.
    ///
    /// The transient `selected` marker is not part of the URL's filter projection.
    pub fn observe(&mut self, pairs: &[(String, String)]) -> FilterState {
        self.current = pairs
            .iter()
            .filter(|(key, _)| key != PARAM_SELECTED)
            .cloned()
            .collect();
        from_pairs(&self.current)
    }

    /// Projects `state` onto the URL.
    ///
    /// Returns the replacement URL when the canonical pairs differ from the current
    /// ones, `None` when the replace would be a no-op.
    pub fn write(&mut self, state: &FilterState) -> Option<String> {
        let next = to_pairs(state);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(to_href(&self.path, state))
    }
}
