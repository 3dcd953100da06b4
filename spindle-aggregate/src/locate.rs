//! Host lookup for existing proxies
//!
//! Proxy-only predicate rules only accept a candidate URI when the host
//! already holds a proxy for it. The store that answers that question lives
//! outside this crate, so the fuser talks to it through a trait.

use std::collections::HashMap;

use spindle_graph_ir::Iri;

use crate::error::AggregateResult;

/// Maps a co-referenced source URI to the proxy that absorbed it, if any
pub trait ProxyLocator {
    /// Look up the proxy URI for a source URI
    ///
    /// `Ok(None)` means no proxy is known for the URI; an error aborts the
    /// aggregation run that asked.
    fn locate(&self, uri: &str) -> AggregateResult<Option<Iri>>;
}

/// Locator for hosts without a proxy index; every lookup misses
///
/// Under this locator a proxy-only rule never accepts a candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProxies;

impl ProxyLocator for NoProxies {
    fn locate(&self, _uri: &str) -> AggregateResult<Option<Iri>> {
        Ok(None)
    }
}

/// In-memory locator, mainly useful in tests and small batch runs
impl ProxyLocator for HashMap<String, Iri> {
    fn locate(&self, uri: &str) -> AggregateResult<Option<Iri>> {
        Ok(self.get(uri).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_proxies_always_misses() {
        let located = NoProxies.locate("http://example.com/thing").unwrap();
        assert!(located.is_none());
    }

    #[test]
    fn map_locator_resolves_known_uris() {
        let mut index = HashMap::new();
        index.insert(
            "http://example.com/thing".to_string(),
            Iri::new("http://proxy.example.com/abc123#id"),
        );

        let hit = index.locate("http://example.com/thing").unwrap();
        assert_eq!(hit, Some(Iri::new("http://proxy.example.com/abc123#id")));
        assert!(index.locate("http://example.com/other").unwrap().is_none());
    }
}
