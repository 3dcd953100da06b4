//! IRI value type
//!
//! IRIs are the identity keys of the whole engine: rule tables are keyed by
//! them, candidate statements are matched against them, and the class
//! fallback heuristic prefix-tests them. A dedicated value type keeps those
//! comparisons explicit instead of scattering raw string handling around.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::sync::Arc;

/// An expanded IRI
///
/// Stored as a shared string so rules and statements can hold the same IRI
/// without copying. Equality, ordering, and hashing all follow the
/// underlying string, which makes `Iri` usable as a map key interchangeably
/// with `&str` lookups.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Create an IRI from an expanded IRI string
    pub fn new(iri: impl AsRef<str>) -> Self {
        Self(Arc::from(iri.as_ref()))
    }

    /// Get the IRI as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Test whether this IRI begins with the given string
    ///
    /// This is the primitive behind the class-resolution fallback, which
    /// matches co-reference URIs against rule alias URIs by prefix rather
    /// than by exact equality.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Self(Arc::from(s.as_str()))
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Iri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Iri {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Iri {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn iri_equality_and_display() {
        let a = Iri::new("http://example.org/thing");
        let b = Iri::from("http://example.org/thing");
        assert_eq!(a, b);
        assert_eq!(a, "http://example.org/thing");
        assert_eq!(a.to_string(), "http://example.org/thing");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map: HashMap<Iri, i32> = HashMap::new();
        map.insert(Iri::new("http://example.org/a"), 1);
        assert_eq!(map.get("http://example.org/a"), Some(&1));
        assert_eq!(map.get("http://example.org/b"), None);
    }

    #[test]
    fn prefix_test() {
        let iri = Iri::new("http://dbpedia.org/resource/London");
        assert!(iri.starts_with("http://dbpedia.org/resource/"));
        assert!(!iri.starts_with("http://dbpedia.org/page/"));
    }
}
