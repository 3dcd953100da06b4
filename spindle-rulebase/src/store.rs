//! Rule store and its builder
//!
//! [`RuleStoreBuilder`] accumulates rules during compilation in registration
//! order. [`RuleStoreBuilder::finalize`] sorts everything into evaluation
//! order and produces the immutable [`RuleStore`] the aggregation engine
//! consumes: class and predicate rules ascending by score (ties keep
//! registration order), the cached-predicate set ascending lexicographically.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use spindle_graph_ir::Iri;
use spindle_vocab::{owl, rdf};

use crate::rules::{ClassRule, CorefRule, ExpectedKind, PredicateRule};

/// Accumulates rules during compilation
#[derive(Debug, Default)]
pub struct RuleStoreBuilder {
    classes: Vec<ClassRule>,
    class_index: HashMap<Iri, usize>,
    predicates: Vec<PredicateRule>,
    predicate_index: HashMap<Iri, usize>,
    cached: BTreeSet<Iri>,
    corefs: Vec<CorefRule>,
    coref_index: HashMap<Iri, usize>,
}

impl RuleStoreBuilder {
    /// Create a builder with the always-cached predicates pre-registered
    pub fn new() -> Self {
        let mut builder = Self::default();
        builder.cached.insert(Iri::new(rdf::TYPE));
        builder.cached.insert(Iri::new(owl::SAME_AS));
        builder
    }

    /// Get or create the class rule for a canonical class URI
    pub fn class_rule(&mut self, uri: &Iri) -> &mut ClassRule {
        let idx = match self.class_index.get(uri) {
            Some(&idx) => idx,
            None => {
                let idx = self.classes.len();
                self.classes.push(ClassRule::new(uri.clone()));
                self.class_index.insert(uri.clone(), idx);
                idx
            }
        };
        &mut self.classes[idx]
    }

    /// Get or create the predicate rule for a canonical target URI
    ///
    /// The target is also registered as a cached predicate, so that source
    /// data expressed directly in the canonical vocabulary survives caching.
    pub fn predicate_rule(&mut self, uri: &Iri) -> &mut PredicateRule {
        self.cached.insert(uri.clone());
        let idx = match self.predicate_index.get(uri) {
            Some(&idx) => idx,
            None => {
                let idx = self.predicates.len();
                self.predicates.push(PredicateRule::new(uri.clone()));
                self.predicate_index.insert(uri.clone(), idx);
                idx
            }
        };
        &mut self.predicates[idx]
    }

    /// Register a predicate whose statements caching must preserve
    pub fn add_cached_predicate(&mut self, uri: &Iri) {
        self.cached.insert(uri.clone());
    }

    /// Register a co-reference trigger rule
    ///
    /// Rules are unique by candidate predicate; re-registering one replaces
    /// its match type.
    pub fn add_coref_rule(&mut self, rule: CorefRule) {
        match self.coref_index.get(&rule.predicate) {
            Some(&idx) => {
                self.corefs[idx].match_type = rule.match_type;
            }
            None => {
                self.coref_index.insert(rule.predicate.clone(), self.corefs.len());
                self.corefs.push(rule);
            }
        }
    }

    /// Sort the accumulated rules into evaluation order
    pub fn finalize(mut self) -> RuleStore {
        // sort_by_key is stable, so equal scores keep registration order
        self.classes.sort_by_key(|rule| rule.score);
        self.predicates.sort_by_key(|rule| rule.score);
        let class_index = self
            .classes
            .iter()
            .enumerate()
            .map(|(idx, rule)| (rule.uri.clone(), idx))
            .collect();
        let predicate_index = self
            .predicates
            .iter()
            .enumerate()
            .map(|(idx, rule)| (rule.target.clone(), idx))
            .collect();
        let store = RuleStore {
            classes: self.classes,
            class_index,
            predicates: self.predicates,
            predicate_index,
            cached_predicates: self.cached.into_iter().collect(),
            corefs: self.corefs,
            coref_index: self.coref_index,
        };
        tracing::debug!(
            classes = store.classes.len(),
            predicates = store.predicates.len(),
            cached_predicates = store.cached_predicates.len(),
            coref_rules = store.corefs.len(),
            "rulebase compiled"
        );
        store
    }
}

/// The compiled rulebase
///
/// Produced by [`RuleStoreBuilder::finalize`]; immutable thereafter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleStore {
    classes: Vec<ClassRule>,
    class_index: HashMap<Iri, usize>,
    predicates: Vec<PredicateRule>,
    predicate_index: HashMap<Iri, usize>,
    cached_predicates: Vec<Iri>,
    corefs: Vec<CorefRule>,
    coref_index: HashMap<Iri, usize>,
}

impl RuleStore {
    /// Class rules in evaluation order (ascending score)
    pub fn classes(&self) -> impl Iterator<Item = &ClassRule> {
        self.classes.iter()
    }

    /// Look up a class rule by canonical URI
    pub fn class(&self, uri: &str) -> Option<&ClassRule> {
        self.class_index.get(uri).map(|&idx| &self.classes[idx])
    }

    /// Number of class rules
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Predicate rules in evaluation order (ascending score)
    pub fn predicates(&self) -> impl Iterator<Item = &PredicateRule> {
        self.predicates.iter()
    }

    /// Look up a predicate rule by canonical target URI
    pub fn predicate(&self, uri: &str) -> Option<&PredicateRule> {
        self.predicate_index
            .get(uri)
            .map(|&idx| &self.predicates[idx])
    }

    /// Number of predicate rules
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    /// The cached-predicate set, ascending lexicographically
    pub fn cached_predicates(&self) -> &[Iri] {
        &self.cached_predicates
    }

    /// Whether statements using this predicate must survive caching
    pub fn is_cached_predicate(&self, uri: &str) -> bool {
        self.cached_predicates
            .binary_search_by(|cached| cached.as_str().cmp(uri))
            .is_ok()
    }

    /// Co-reference trigger rules in registration order
    pub fn coref_rules(&self) -> impl Iterator<Item = &CorefRule> {
        self.corefs.iter()
    }

    /// Look up the co-reference rule for a candidate predicate
    pub fn coref_rule(&self, predicate: &str) -> Option<&CorefRule> {
        self.coref_index
            .get(predicate)
            .map(|&idx| &self.corefs[idx])
    }

    /// Render the rulebase for diagnostic logging
    pub fn dump(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "cached predicates set ({} entries):\n",
            self.cached_predicates.len()
        ));
        for (idx, uri) in self.cached_predicates.iter().enumerate() {
            output.push_str(&format!("{}: <{}>\n", idx, uri));
        }
        output.push_str(&format!(
            "classes rule-base ({} entries):\n",
            self.classes.len()
        ));
        for rule in &self.classes {
            output.push_str(&format!("{}: <{}>\n", rule.score, rule.uri));
            for alias in &rule.aliases {
                output.push_str(&format!("  +--> <{}>\n", alias.uri));
            }
        }
        output.push_str(&format!(
            "predicates rule-base ({} entries):\n",
            self.predicates.len()
        ));
        for rule in &self.predicates {
            let expect = match rule.expected {
                ExpectedKind::Uri => "URI",
                ExpectedKind::Literal => "literal",
                ExpectedKind::Unknown => "unknown",
            };
            let proxy_only = if rule.proxy_only { " [proxy-only]" } else { "" };
            match &rule.datatype {
                Some(datatype) => output.push_str(&format!(
                    "{}: <{}> ({} <{}>){}\n",
                    rule.score, rule.target, expect, datatype, proxy_only
                )),
                None => output.push_str(&format!(
                    "{}: <{}> ({}){}\n",
                    rule.score, rule.target, expect, proxy_only
                )),
            }
            for entry in &rule.matches {
                match &entry.only_for {
                    Some(class) => output.push_str(&format!(
                        "  +--> {}: <{}> (for <{}>)\n",
                        entry.priority, entry.source, class
                    )),
                    None => output.push_str(&format!(
                        "  +--> {}: <{}>\n",
                        entry.priority, entry.source
                    )),
                }
            }
        }
        output
    }
}
