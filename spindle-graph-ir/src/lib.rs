//! RDF term and graph types for the Spindle aggregation engine
//!
//! This crate provides the value types the rulebase compiler and the proxy
//! aggregator operate on: IRIs, terms, triples, and a small owned graph with
//! the scan helpers rule compilation needs.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form; no
//!    prefix handling happens at this layer.
//!
//! 2. **Tri-state literals** - A literal carries either a datatype, or a
//!    language tag, or neither. The aggregation rules distinguish all three
//!    states, so neither field is defaulted.
//!
//! 3. **Insertion order preserved** - The `Graph` type uses `Vec<Triple>`
//!    and keeps statements in the order they were added. Candidate
//!    processing order is observable in the engine's tie-break behavior.
//!
//! # Example
//!
//! ```
//! use spindle_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//!
//! graph.add_triple(
//!     Term::iri("http://example.org/alice"),
//!     "http://xmlns.com/foaf/0.1/name",
//!     Term::plain("Alice"),
//! );
//!
//! assert_eq!(graph.len(), 1);
//! ```

mod graph;
mod iri;
mod term;
mod triple;

pub use graph::Graph;
pub use iri::Iri;
pub use term::{BlankId, Literal, Term};
pub use triple::Triple;
