//! Per-entity aggregation state

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use spindle_graph_ir::{Graph, Iri, Term, Triple};

/// Working record for one aggregated entity
///
/// Carries the canonical proxy URI, the co-referenced source URIs, and the
/// merged output as it accumulates: the proxy statement graph, the optional
/// root-graph duplicates, per-language title and description text, the
/// coordinate fields, and the running prominence-adjusted score.
///
/// An entry is transient. It is built fresh for every aggregation run and
/// must be discarded on retry; nothing in it is shared between runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProxyEntry {
    pub(crate) uri: Iri,
    pub(crate) refs: Vec<Iri>,
    pub(crate) score: i32,
    pub(crate) classname: Option<Iri>,
    pub(crate) types: Vec<Iri>,
    pub(crate) proxy: Graph,
    pub(crate) root: Graph,
    pub(crate) titles: BTreeMap<String, String>,
    pub(crate) descriptions: BTreeMap<String, String>,
    pub(crate) title: Option<String>,
    pub(crate) title_en: Option<String>,
    pub(crate) latitude: Option<f64>,
    pub(crate) longitude: Option<f64>,
}

impl ProxyEntry {
    /// Create a fresh entry for the given canonical URI
    pub fn new(uri: impl Into<Iri>, base_score: i32) -> Self {
        Self {
            uri: uri.into(),
            refs: Vec::new(),
            score: base_score,
            classname: None,
            types: Vec::new(),
            proxy: Graph::new(),
            root: Graph::new(),
            titles: BTreeMap::new(),
            descriptions: BTreeMap::new(),
            title: None,
            title_en: None,
            latitude: None,
            longitude: None,
        }
    }

    /// The canonical proxy URI
    pub fn uri(&self) -> &Iri {
        &self.uri
    }

    /// Register a source URI as co-referenced with this entity
    pub fn add_ref(&mut self, uri: impl Into<Iri>) {
        let uri = uri.into();
        if !self.refs.contains(&uri) {
            self.refs.push(uri);
        }
    }

    /// The co-referenced source URIs, in registration order
    pub fn refs(&self) -> &[Iri] {
        &self.refs
    }

    /// Whether the given URI is one of this entity's co-references
    pub fn has_ref(&self, uri: &str) -> bool {
        self.refs.iter().any(|r| r.as_str() == uri)
    }

    /// The running prominence-adjusted score; lower is stronger
    pub fn score(&self) -> i32 {
        self.score
    }

    /// The resolved class, once class resolution has run and matched
    pub fn classname(&self) -> Option<&Iri> {
        self.classname.as_ref()
    }

    /// Every type URI observed during class resolution: the declared types
    /// plus the base URI of each class rule that matched one of them
    pub fn types(&self) -> &[Iri] {
        &self.types
    }

    /// The merged per-entity statement graph
    pub fn proxy_statements(&self) -> &Graph {
        &self.proxy
    }

    /// Statements duplicated for the shared root graph in multigraph mode
    pub fn root_statements(&self) -> &Graph {
        &self.root
    }

    /// Accepted title text per normalized language tag ("" for untagged)
    pub fn titles(&self) -> &BTreeMap<String, String> {
        &self.titles
    }

    /// Accepted description text per normalized language tag
    pub fn descriptions(&self) -> &BTreeMap<String, String> {
        &self.descriptions
    }

    /// Untagged title shortcut, possibly synthesized from the URI
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// English title shortcut
    pub fn title_en(&self) -> Option<&str> {
        self.title_en.as_deref()
    }

    /// WGS84 latitude, when a matching decimal literal won
    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    /// WGS84 longitude, when a matching decimal literal won
    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// The entity's position, only when both halves are present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    pub(crate) fn self_term(&self) -> Term {
        Term::Iri(self.uri.clone())
    }

    pub(crate) fn deduct(&mut self, amount: i32) {
        self.score -= amount;
    }

    pub(crate) fn record_type(&mut self, uri: &Iri) {
        if !self.types.contains(uri) {
            self.types.push(uri.clone());
        }
    }

    // The output graphs suppress exact duplicates; candidate statements
    // routinely repeat across source descriptions.

    pub(crate) fn add_proxy_statement(&mut self, triple: Triple) {
        if !self.proxy.contains(&triple) {
            self.proxy.add(triple);
        }
    }

    pub(crate) fn add_root_statement(&mut self, triple: Triple) {
        if !self.root.contains(&triple) {
            self.root.add(triple);
        }
    }
}
