//! RDF triple type

use crate::{Iri, Term};
use serde::{Deserialize, Serialize};

/// A single RDF statement
///
/// The predicate is always an IRI; subjects may be IRIs or blank nodes and
/// objects may be any term. No validation of the subject position happens
/// here, consumers check the shapes they require.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject term
    pub s: Term,
    /// Predicate IRI
    pub p: Iri,
    /// Object term
    pub o: Term,
}

impl Triple {
    /// Create a triple from components
    pub fn new(s: Term, p: impl Into<Iri>, o: Term) -> Self {
        Self { s, p: p.into(), o }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}> {} .", self.s, self.p, self.o)
    }
}
