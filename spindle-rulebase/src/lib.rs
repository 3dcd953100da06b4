//! Rulebase compilation for the co-reference aggregation engine
//!
//! An aggregation rulebase is itself RDF: classes, predicate mappings and
//! co-reference triggers are declared in the `spindle:` vocabulary and
//! compiled here into the in-memory structures the engine evaluates. This
//! crate covers the compilation half; candidate fusion against a compiled
//! [`RuleStore`] lives in the aggregation crate.
//!
//! # Key Features
//!
//! - **Compile once, evaluate many times**: [`compile_rulebase`] walks the
//!   rulebase graph a single time and produces an immutable [`RuleStore`]
//!   with rules pre-sorted into evaluation order
//! - **Class rules**: canonical classes with scored precedence and alias
//!   lists mapping source-vocabulary types onto them
//! - **Predicate rules**: canonical target predicates with per-source match
//!   entries, expected value kinds, datatypes and behaviour flags
//! - **Cached-predicate set**: every predicate the engine must retain,
//!   seeded with `rdf:type` and `owl:sameAs` and sorted lexicographically
//! - **Co-reference triggers**: candidate predicates bound to match-type
//!   strategies registered by the host in a [`CorefMatchTypes`] registry
//!
//! # Usage
//!
//! Parse the rulebase document into a [`Graph`](spindle_graph_ir::Graph),
//! register the supported co-reference match types, then call
//! [`compile_rulebase`]. Compilation never fails: malformed statements are
//! skipped with a logged warning and the remaining rules still compile.

pub mod compiler;
pub mod coref;
pub mod rules;
pub mod store;

pub use compiler::{compile_rulebase, RuleVocab};
pub use coref::{CorefMatchTypes, CorefMatcher, CorefSet, ResourceMatch};
pub use rules::{
    ClassAlias, ClassRule, CorefRule, ExpectedKind, PredicateMatch, PredicateRule,
};
pub use store::{RuleStore, RuleStoreBuilder};
