//! Host-supplied settings for aggregation runs

use spindle_graph_ir::Iri;
use spindle_vocab::rdfs;

use crate::entry::ProxyEntry;

/// Settings shared by every aggregation run against one proxy store
///
/// The same value is reused across entries; nothing here is mutated by a run.
#[derive(Clone, Debug)]
pub struct AggregateConfig {
    /// Root URI prefix of the proxy namespace, used when synthesizing a
    /// title from an entry's own URI
    pub root: String,
    /// Predicate whose accepted plain literals also feed the entry's
    /// title shortcut fields
    pub title_predicate: Iri,
    /// When set, indexed statements are duplicated into a separate
    /// root-graph output alongside the per-entry proxy graph
    pub multigraph: bool,
    /// Starting score for a fresh proxy entry; prominence deductions
    /// are applied against this
    pub base_score: i32,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            root: String::new(),
            title_predicate: Iri::new(rdfs::LABEL),
            multigraph: false,
            base_score: 50,
        }
    }
}

impl AggregateConfig {
    /// Create a configuration for the given proxy namespace root
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Create a fresh entry for a proxy URI, starting at the base score
    pub fn new_entry(&self, uri: impl Into<Iri>) -> ProxyEntry {
        ProxyEntry::new(uri, self.base_score)
    }
}
