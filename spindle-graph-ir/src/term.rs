//! RDF term types: IRI, blank node, and literal
//!
//! Terms are the building blocks of triples. A term can be:
//! - An IRI (always expanded, never prefixed)
//! - A blank node (with stable identifier)
//! - A literal (lexical form + optional datatype or language tag)

use crate::Iri;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Blank node identifier
///
/// Blank node IDs are stable within a graph but have no global meaning.
/// Rulebase documents use them for property match-description bundles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Create a blank node ID from a label
    ///
    /// The label should NOT include the `_:` prefix.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Get the label (without `_:` prefix)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// An RDF literal
///
/// The lexical form is kept verbatim. A literal has at most one of a
/// datatype IRI or a language tag; a plain literal has neither. The engine's
/// value-typing rules branch on exactly this distinction, so the constructors
/// enforce it rather than leaving both fields open.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    /// The lexical form
    pub lexical: Arc<str>,
    /// Datatype IRI, if typed
    pub datatype: Option<Iri>,
    /// Language tag, if tagged (mutually exclusive with `datatype`)
    pub language: Option<Arc<str>>,
}

impl Literal {
    /// Create a plain literal (no datatype, no language tag)
    pub fn plain(lexical: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: None,
            language: None,
        }
    }

    /// Create a language-tagged literal
    pub fn lang(lexical: impl AsRef<str>, language: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: None,
            language: Some(Arc::from(language.as_ref())),
        }
    }

    /// Create a typed literal
    pub fn typed(lexical: impl AsRef<str>, datatype: impl Into<Iri>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    /// Get the lexical form
    pub fn as_str(&self) -> &str {
        &self.lexical
    }

    /// Get the language tag, if any
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Check whether this literal carries the given datatype IRI
    pub fn is_typed(&self, datatype_iri: &str) -> bool {
        self.datatype
            .as_ref()
            .is_some_and(|dt| dt.as_str() == datatype_iri)
    }

    /// Parse the lexical form as an integer
    ///
    /// The rulebase scores, priorities, and prominences are read this way:
    /// the datatype is not consulted, only the lexical form.
    pub fn int_value(&self) -> Option<i32> {
        self.lexical.trim().parse().ok()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.lexical)?;
        if let Some(lang) = &self.language {
            write!(f, "@{lang}")?;
        } else if let Some(dt) = &self.datatype {
            write!(f, "^^<{dt}>")?;
        }
        Ok(())
    }
}

/// An RDF term (subject or object position)
///
/// # Invariants
///
/// - `Term::Iri` always contains an **expanded** IRI, never a prefixed form.
/// - The predicate position of a triple is an `Iri`, not a `Term`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    /// Full expanded IRI (e.g., "http://schema.org/Person")
    Iri(Iri),

    /// Blank node with stable identifier
    BlankNode(BlankId),

    /// Literal value
    Literal(Literal),
}

impl Term {
    /// Create an IRI term from an expanded IRI string
    pub fn iri(iri: impl Into<Iri>) -> Self {
        Term::Iri(iri.into())
    }

    /// Create a blank node term
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::BlankNode(BlankId::new(label))
    }

    /// Create a plain literal term
    pub fn plain(lexical: impl AsRef<str>) -> Self {
        Term::Literal(Literal::plain(lexical))
    }

    /// Create a language-tagged literal term
    pub fn lang(lexical: impl AsRef<str>, language: impl AsRef<str>) -> Self {
        Term::Literal(Literal::lang(lexical, language))
    }

    /// Create a typed literal term
    pub fn typed(lexical: impl AsRef<str>, datatype: impl Into<Iri>) -> Self {
        Term::Literal(Literal::typed(lexical, datatype))
    }

    /// Check if this is an IRI term
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Check if this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Try to get as IRI
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get as blank node ID
    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Term::BlankNode(id) => Some(id),
            _ => None,
        }
    }

    /// Try to get as literal
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(id) => write!(f, "{id}"),
            Term::Literal(lit) => write!(f, "{lit}"),
        }
    }
}
