//! Co-reference match types
//!
//! The rulebase names a match type for each co-reference candidate
//! predicate; the host registers the strategies it supports in a
//! [`CorefMatchTypes`] registry before compilation. Compilation only keeps
//! coref rules whose match type is registered, so an engine without (say)
//! Wikipedia matching simply drops those rules with a logged error.
//!
//! The strategies themselves run during correlation, outside this crate.
//! [`ResourceMatch`] covers the common case of linking the two resources
//! directly.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use spindle_graph_ir::Iri;

/// A co-reference matching strategy
///
/// Invoked once per candidate statement whose predicate carries a
/// [`CorefRule`](crate::CorefRule) with this strategy's match type.
pub trait CorefMatcher: Send + Sync {
    /// Record the link expressed by one candidate statement
    ///
    /// Returns true when the statement produced a new link.
    fn apply(&self, set: &mut CorefSet, subject: &str, object: &str) -> bool;
}

/// Links the statement's subject and object directly
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceMatch;

impl CorefMatcher for ResourceMatch {
    fn apply(&self, set: &mut CorefSet, subject: &str, object: &str) -> bool {
        set.add(subject, object)
    }
}

/// Registry of supported co-reference match types, keyed by URI
#[derive(Clone, Default)]
pub struct CorefMatchTypes {
    types: HashMap<Iri, Arc<dyn CorefMatcher>>,
}

impl CorefMatchTypes {
    /// Create an empty registry
    ///
    /// Compiling against an empty registry ignores every `spindle:coref`
    /// statement, which suits hosts that do not correlate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy under a match type URI, replacing any previous one
    pub fn register(&mut self, match_type: impl Into<Iri>, matcher: Arc<dyn CorefMatcher>) {
        self.types.insert(match_type.into(), matcher);
    }

    /// Look up the strategy for a match type URI
    pub fn get(&self, match_type: &str) -> Option<&Arc<dyn CorefMatcher>> {
        self.types.get(match_type)
    }

    /// Whether a match type URI is registered
    pub fn contains(&self, match_type: &str) -> bool {
        self.types.contains_key(match_type)
    }

    /// Number of registered match types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no match types are registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl fmt::Debug for CorefMatchTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&str> = self.types.keys().map(Iri::as_str).collect();
        types.sort_unstable();
        f.debug_struct("CorefMatchTypes")
            .field("types", &types)
            .finish()
    }
}

/// Accumulated co-reference links
///
/// An ordered set of `(left, right)` pairs; re-adding an identical pair is
/// a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorefSet {
    links: Vec<(Iri, Iri)>,
}

impl CorefSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link, returning true when it was not already present
    pub fn add(&mut self, left: impl Into<Iri>, right: impl Into<Iri>) -> bool {
        let left = left.into();
        let right = right.into();
        if self.links.iter().any(|(l, r)| *l == left && *r == right) {
            return false;
        }
        self.links.push((left, right));
        true
    }

    /// Whether the exact ordered pair is present
    pub fn contains(&self, left: &str, right: &str) -> bool {
        self.links.iter().any(|(l, r)| *l == left && *r == right)
    }

    /// The links in insertion order
    pub fn links(&self) -> &[(Iri, Iri)] {
        &self.links
    }

    /// Number of links
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the set holds no links
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
