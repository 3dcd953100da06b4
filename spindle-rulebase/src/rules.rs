//! Compiled rule types
//!
//! These are the entries a finished [`RuleStore`](crate::RuleStore) holds:
//! class rules with their alias lists, predicate rules with their match
//! entries, and co-reference trigger rules. Scores and priorities rank
//! lower-is-stronger throughout; prominence is an amount subtracted from a
//! proxy's running score when the rule contributes a value.

use serde::{Deserialize, Serialize};
use spindle_graph_ir::Iri;

/// What kind of value a predicate rule accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpectedKind {
    /// Not declared; candidates are ignored
    #[default]
    Unknown,
    /// Candidates must be resources
    Uri,
    /// Candidates must be literals
    Literal,
}

/// One alias of a class rule
///
/// An alias both matches declared `rdf:type` values exactly and serves as a
/// prefix root for the co-reference fallback. A non-zero prominence on the
/// alias overrides the class rule's own prominence when this alias is the
/// one that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAlias {
    /// Alias class URI
    pub uri: Iri,
    /// Score deduction when this alias matches (0 = defer to the rule)
    pub prominence: i32,
}

/// A compiled class rule
///
/// Keyed by canonical class URI. Every rule carries a self-alias (its own
/// URI, prominence 0) from the moment it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRule {
    /// Canonical class URI
    pub uri: Iri,
    /// Rule precedence, lower is stronger
    pub score: i32,
    /// Default score deduction when the class matches
    pub prominence: i32,
    /// Alias list, in registration order
    pub aliases: Vec<ClassAlias>,
}

impl ClassRule {
    /// Create a rule with the default score and a self-alias
    pub fn new(uri: Iri) -> Self {
        let aliases = vec![ClassAlias {
            uri: uri.clone(),
            prominence: 0,
        }];
        Self {
            uri,
            score: 100,
            prominence: 0,
            aliases,
        }
    }

    /// Add or update an alias
    ///
    /// Aliases are unique by URI. Re-adding an existing alias updates its
    /// prominence only when the new value is non-zero; adding a new one
    /// appends it with the given prominence as-is.
    pub fn add_alias(&mut self, uri: Iri, prominence: i32) {
        if let Some(existing) = self.aliases.iter_mut().find(|a| a.uri == uri) {
            if prominence != 0 {
                existing.prominence = prominence;
            }
            return;
        }
        self.aliases.push(ClassAlias { uri, prominence });
    }

    /// Find the alias equal to the given type URI, if any
    pub fn matching_alias(&self, type_uri: &Iri) -> Option<&ClassAlias> {
        self.aliases.iter().find(|a| a.uri == *type_uri)
    }

    /// The score deduction to apply when the given alias matched
    ///
    /// The alias prominence wins when non-zero, otherwise the rule's own.
    pub fn prominence_for(&self, alias: &ClassAlias) -> i32 {
        if alias.prominence != 0 {
            alias.prominence
        } else {
            self.prominence
        }
    }
}

/// One source-predicate match entry of a predicate rule
///
/// `(source, only_for, inverse)` is the identity key within a rule's match
/// list; `only_for` participates including its present/absent distinction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateMatch {
    /// Source predicate URI this entry matches
    pub source: Iri,
    /// Restrict this entry to entities resolved to the given class
    pub only_for: Option<Iri>,
    /// Candidate ranking, lower wins; zero applies immediately
    pub priority: i32,
    /// Score deduction for this entry (0 = defer to the rule)
    pub prominence: i32,
    /// Match the source predicate on the inverse direction
    pub inverse: bool,
}

/// A compiled predicate rule ("predicate map")
///
/// Keyed by canonical target predicate URI. The match list holds every
/// source predicate that can express this target, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateRule {
    /// Canonical target predicate URI
    pub target: Iri,
    /// Kind of value candidates must carry
    pub expected: ExpectedKind,
    /// Required candidate datatype, for literal-valued rules
    pub datatype: Option<Iri>,
    /// Accept resource candidates only when they resolve to another proxy
    pub proxy_only: bool,
    /// Duplicate winning statements into the root graph in multigraph mode
    pub indexed: bool,
    /// This target is inverse-valued; winners never reach the root graph
    pub inverse: bool,
    /// Rule precedence, lower is stronger
    pub score: i32,
    /// Default score deduction when a match contributes
    pub prominence: i32,
    /// Match entries, in registration order
    pub matches: Vec<PredicateMatch>,
}

impl PredicateRule {
    /// Create a rule with the default score and no matches
    pub fn new(target: Iri) -> Self {
        Self {
            target,
            expected: ExpectedKind::Unknown,
            datatype: None,
            proxy_only: false,
            indexed: false,
            inverse: false,
            score: 100,
            prominence: 0,
            matches: Vec::new(),
        }
    }

    /// Add or update a match entry
    ///
    /// An entry with the same `(source, only_for, inverse)` key has its
    /// priority and prominence overwritten; any difference in the key,
    /// including `only_for` present vs absent, appends a new entry instead.
    pub fn add_match(&mut self, entry: PredicateMatch) {
        for existing in &mut self.matches {
            if existing.source != entry.source
                || existing.only_for != entry.only_for
                || existing.inverse != entry.inverse
            {
                continue;
            }
            existing.priority = entry.priority;
            existing.prominence = entry.prominence;
            return;
        }
        self.matches.push(entry);
    }

    /// The score deduction to apply when the given entry contributed
    pub fn prominence_for(&self, entry: &PredicateMatch) -> i32 {
        if entry.prominence != 0 {
            entry.prominence
        } else {
            self.prominence
        }
    }
}

/// A compiled co-reference trigger rule
///
/// Statements using the candidate predicate feed the named match-type
/// strategy during co-reference detection (performed by the host).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorefRule {
    /// Candidate predicate URI
    pub predicate: Iri,
    /// Registered match-type identifier
    pub match_type: Iri,
}
