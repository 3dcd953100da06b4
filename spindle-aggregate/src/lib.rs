//! Proxy aggregation for co-referenced RDF entities
//!
//! Once a group of source URIs has been identified as describing a single
//! real-world entity, this crate condenses their combined RDF descriptions
//! into one proxy: a resolved class, the best value per target predicate
//! (or per language), a relevance score, and shortcut fields for titles and
//! coordinates. Rule compilation lives in the rulebase crate; this one
//! evaluates a compiled [`RuleStore`] against entity data.
//!
//! # Key Features
//!
//! - **Class resolution**: picks the strongest-scoring class rule matched
//!   by the entity's declared types, with a URI-prefix fallback for
//!   sources that declare none
//! - **Candidate fusion**: best-candidate buffering per rule under numeric
//!   priorities where lower wins and a challenger must be strictly better,
//!   so the outcome does not depend on statement order
//! - **Language awareness**: plain-literal rules keep one best candidate
//!   per normalized language tag instead of one overall
//! - **Proxy indirection**: `proxyOnly` rules rewrite candidate URIs to
//!   their local proxies through a host-supplied [`ProxyLocator`]
//! - **Scoring**: every contributing rule subtracts its prominence from
//!   the entry's base score, so better-described entities rank stronger
//!
//! # Usage
//!
//! Build a [`ProxyEntry`] from the proxy URI and its co-reference set,
//! collect the combined source statements into a
//! [`Graph`](spindle_graph_ir::Graph), then call [`aggregate`] with a
//! compiled rulebase. Entries are transient: every run starts from a fresh
//! one, so identical inputs always produce identical output and a failed
//! run is retried by simply running again.

pub mod class;
pub mod config;
pub mod entry;
pub mod error;
pub mod locate;
pub mod props;

pub use class::ClassMatch;
pub use config::AggregateConfig;
pub use entry::ProxyEntry;
pub use error::{AggregateError, AggregateResult};
pub use locate::{NoProxies, ProxyLocator};

use spindle_graph_ir::Graph;
use spindle_rulebase::RuleStore;

/// Run one full aggregation pass over an entity's combined source data
///
/// Resolves the entry's class first and fuses property candidates second,
/// so domain-restricted matches see the freshly resolved class. The entry
/// accumulates the merged statements, the score deductions, and the
/// shortcut fields as it goes.
///
/// The only failure is a [`ProxyLocator`] error, which leaves the entry
/// partially updated; callers retry with a fresh entry.
pub fn aggregate(
    entry: &mut ProxyEntry,
    source: &Graph,
    rules: &RuleStore,
    config: &AggregateConfig,
    locator: &dyn ProxyLocator,
) -> AggregateResult<()> {
    class::update_entry(entry, source, rules, config);
    props::update_entry(entry, source, rules, config, locator)
}
