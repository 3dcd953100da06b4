//! Class resolution
//!
//! Picks the single best-fitting class for an entity out of the `rdf:type`
//! statements found across its co-referenced source descriptions. Rules are
//! consulted in score order (lower is stronger). Every observed type is
//! asserted on the proxy whether or not a rule matches; a winner
//! additionally stamps the entry's class and contributes a prominence
//! deduction to the entry score.

use spindle_graph_ir::{Graph, Iri, Term, Triple};
use spindle_rulebase::{ClassAlias, ClassRule, RuleStore};
use spindle_vocab::rdf;

use crate::config::AggregateConfig;
use crate::entry::ProxyEntry;

/// Sentinel score worse than any real rule's; the running best starts here.
const WORST_SCORE: i32 = 1000;

/// Outcome of class resolution
#[derive(Clone, Debug, PartialEq)]
pub struct ClassMatch {
    /// The winning rule's class URI
    pub class: Iri,
    /// Amount to subtract from the entry score: the matched alias's
    /// prominence when non-zero, else the rule's own
    pub deduction: i32,
}

/// Resolve the best-fitting class for an entity
///
/// `types` are the entity's declared type URIs and `refs` its co-referenced
/// source URIs. Every declared type is tested against every rule's alias
/// list; an equal-or-better-scoring match found later replaces the running
/// best, so ties go to the last match encountered. When no alias matches
/// any declared type at all, membership falls back to testing each alias
/// URI as a string prefix of the co-references. The prefix test can
/// over-match when one URI is a textual prefix of another; it is kept as a
/// deliberately coarse heuristic for sources that only reveal their
/// vocabulary through URI structure.
pub fn resolve(types: &[Iri], refs: &[Iri], rules: &RuleStore) -> Option<ClassMatch> {
    let mut observed = Vec::new();
    resolve_observed(types, refs, rules, &mut observed)
}

/// As [`resolve`], also collecting every observed type URI
///
/// The collection gathers each declared type plus the base URI of every
/// rule recorded as the running best, whether from the alias scan or the
/// prefix fallback, in first-seen order. It feeds the `rdf:type`
/// statements of the merged output and external indexing.
pub fn resolve_observed(
    types: &[Iri],
    refs: &[Iri],
    rules: &RuleStore,
    observed: &mut Vec<Iri>,
) -> Option<ClassMatch> {
    let mut best: Option<(&ClassRule, &ClassAlias)> = None;
    let mut best_score = WORST_SCORE;

    for declared in types {
        observe(observed, declared);
        for rule in rules.classes() {
            if rule.score > best_score {
                continue;
            }
            if let Some(alias) = rule.matching_alias(declared) {
                observe(observed, &rule.uri);
                best = Some((rule, alias));
                best_score = rule.score;
            }
        }
    }

    if best.is_none() {
        for rule in rules.classes() {
            if rule.score > best_score {
                continue;
            }
            let hit = rule
                .aliases
                .iter()
                .find(|alias| refs.iter().any(|r| r.starts_with(alias.uri.as_str())));
            if let Some(alias) = hit {
                observe(observed, &rule.uri);
                best = Some((rule, alias));
                best_score = rule.score;
            }
        }
    }

    let (rule, alias) = best?;
    tracing::debug!(class = %rule.uri, score = rule.score, "class resolved");
    Some(ClassMatch {
        class: rule.uri.clone(),
        deduction: rule.prominence_for(alias),
    })
}

fn observe(observed: &mut Vec<Iri>, uri: &Iri) {
    if !observed.contains(uri) {
        observed.push(uri.clone());
    }
}

/// Resolve and record the class of a proxy entry
///
/// Scans the source graph for `rdf:type` statements about any co-reference
/// and resolves them against the rulebase. Every observed type gains an
/// `rdf:type` statement in the entry's proxy graph whether or not a rule
/// matched. On a match the entry additionally gains the class and the
/// match's prominence deduction, and in multigraph mode the resolved
/// class's statement alone is duplicated into the root graph.
pub fn update_entry(
    entry: &mut ProxyEntry,
    source: &Graph,
    rules: &RuleStore,
    config: &AggregateConfig,
) -> Option<Iri> {
    let mut declared = Vec::new();
    for r in entry.refs() {
        let subject = Term::Iri(r.clone());
        for object in source.objects_of(&subject, rdf::TYPE) {
            if let Some(class) = object.as_iri() {
                observe(&mut declared, class);
            }
        }
    }

    let mut observed = Vec::new();
    let matched = resolve_observed(&declared, entry.refs(), rules, &mut observed);
    match &matched {
        Some(matched) => {
            entry.classname = Some(matched.class.clone());
            entry.deduct(matched.deduction);
        }
        None => tracing::warn!(uri = %entry.uri(), "no class rule matched"),
    }

    let self_term = entry.self_term();
    for class in &observed {
        let triple = Triple::new(self_term.clone(), rdf::TYPE, Term::Iri(class.clone()));
        if config.multigraph && entry.classname() == Some(class) {
            entry.add_root_statement(triple.clone());
        }
        entry.add_proxy_statement(triple);
        entry.record_type(class);
    }

    matched.map(|m| m.class)
}
