//! RDF graph - a collection of triples
//!
//! The `Graph` type uses `Vec<Triple>` and preserves insertion order; the
//! aggregation engine's tie-break rules make statement order observable, so
//! no implicit sorting or deduplication happens on add.

use crate::{Iri, Term, Triple};
use serde::{Deserialize, Serialize};

/// A collection of RDF triples
///
/// Provides the two scan shapes rule compilation needs: all statements about
/// a subject, and the objects of a (subject, predicate) pair. Both are plain
/// linear scans; rule graphs and per-entity candidate sets are small.
///
/// # Example
///
/// ```
/// use spindle_graph_ir::{Graph, Term};
///
/// let mut graph = Graph::new();
/// graph.add_triple(
///     Term::iri("http://example.org/alice"),
///     "http://xmlns.com/foaf/0.1/name",
///     Term::plain("Alice"),
/// );
///
/// let subject = Term::iri("http://example.org/alice");
/// let names: Vec<_> = graph
///     .objects_of(&subject, "http://xmlns.com/foaf/0.1/name")
///     .collect();
/// assert_eq!(names.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    triples: Vec<Triple>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: impl Into<Iri>, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Check whether an identical triple is already present
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Iterate over triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Get a reference to the triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Get all triples (consuming the graph)
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }

    /// Iterate over all statements whose subject equals the given term
    pub fn statements_about<'a>(
        &'a self,
        subject: &'a Term,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| t.s == *subject)
    }

    /// Iterate over the objects of all (subject, predicate) statements
    pub fn objects_of<'a>(
        &'a self,
        subject: &'a Term,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.s == *subject && t.p.as_str() == predicate)
            .map(|t| &t.o)
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}
