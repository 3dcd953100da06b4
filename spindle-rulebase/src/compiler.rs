//! Rulebase compilation
//!
//! Turns an RDF rulebase graph into a [`RuleStore`]. The rulebase
//! vocabulary lives in the `spindle:` namespace, with `olo:index` for
//! scores and priorities and `rdfs:domain` for class-scoped matches.

use spindle_graph_ir::{Graph, Iri, Literal, Term, Triple};
use spindle_vocab::{olo, rdf, rdfs, spindle, xsd};

use crate::coref::CorefMatchTypes;
use crate::rules::{CorefRule, ExpectedKind, PredicateMatch};
use crate::store::{RuleStore, RuleStoreBuilder};

/// The rulebase statement forms the compiler dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleVocab {
    /// `rdf:type`, declaring a `spindle:Class` or `spindle:Property`
    Type,
    /// `spindle:expressedAs`, aliasing one class to another
    ExpressedAs,
    /// `spindle:property`, attaching a match bundle to a source predicate
    Property,
    /// `spindle:inverseProperty`, the same matched in the inverse direction
    InverseProperty,
    /// `spindle:coref`, naming a co-reference match type
    Coref,
    /// Anything else; ignored
    Other,
}

impl RuleVocab {
    /// Classify a statement predicate
    pub fn classify(predicate: &str) -> Self {
        match predicate {
            rdf::TYPE => Self::Type,
            spindle::EXPRESSED_AS => Self::ExpressedAs,
            spindle::PROPERTY => Self::Property,
            spindle::INVERSE_PROPERTY => Self::InverseProperty,
            spindle::COREF => Self::Coref,
            _ => Self::Other,
        }
    }
}

/// Compile a rulebase graph into a [`RuleStore`]
///
/// The graph is scanned statement by statement:
///
/// * `ex:Class rdf:type spindle:Class` declares a class rule; an
///   `olo:index` on the class sets its score.
/// * `ex:Alias spindle:expressedAs ex:Class` adds `ex:Alias` to the class
///   rule's alias list, with the alias's own `spindle:prominence` when one
///   parses.
/// * `ex:prop rdf:type spindle:Property` declares a predicate rule, filled
///   in from the subject's `olo:index`, `spindle:expect`,
///   `spindle:expectType`, `spindle:proxyOnly`, `spindle:indexed`,
///   `spindle:inverse` and `spindle:prominence` statements.
/// * `ex:source spindle:property [ ... ]` attaches a match bundle to a
///   predicate rule; the bundle names its target rule with
///   `spindle:expressedAs` and may scope the match to classes with
///   `rdfs:domain`. `spindle:inverseProperty` is the same form matched in
///   the inverse direction.
/// * `ex:pred spindle:coref spindle:resourceMatch` registers a
///   co-reference candidate predicate, provided the match type is present
///   in `match_types`.
///
/// Malformed statements are skipped, logging at most a warning, so a
/// partially broken rulebase still compiles to the rules that do parse.
pub fn compile_rulebase(graph: &Graph, match_types: &CorefMatchTypes) -> RuleStore {
    let mut builder = RuleStoreBuilder::new();
    for triple in graph.iter() {
        apply_statement(&mut builder, graph, match_types, triple);
    }
    builder.finalize()
}

fn apply_statement(
    builder: &mut RuleStoreBuilder,
    graph: &Graph,
    match_types: &CorefMatchTypes,
    triple: &Triple,
) {
    // rule subjects are always named; bundle bodies are reached through
    // the subject's own statements, not from here
    let Some(subject) = triple.s.as_iri() else {
        return;
    };
    match RuleVocab::classify(triple.p.as_str()) {
        RuleVocab::Type => {
            let Some(class) = triple.o.as_iri() else {
                return;
            };
            if *class == spindle::CLASS {
                compile_class(builder, graph, &triple.s, subject);
            } else if *class == spindle::PROPERTY_CLASS {
                compile_predicate(builder, graph, &triple.s, subject);
            }
        }
        RuleVocab::ExpressedAs => {
            if let Some(canonical) = triple.o.as_iri() {
                compile_class_alias(builder, graph, subject, canonical);
            }
        }
        RuleVocab::Property => {
            if !triple.o.is_literal() {
                compile_predicate_match(builder, graph, subject, &triple.o, false);
            }
        }
        RuleVocab::InverseProperty => {
            if !triple.o.is_literal() {
                compile_predicate_match(builder, graph, subject, &triple.o, true);
            }
        }
        RuleVocab::Coref => compile_coref(builder, match_types, subject, &triple.o),
        RuleVocab::Other => {}
    }
}

/// `ex:Class rdf:type spindle:Class`
fn compile_class(builder: &mut RuleStoreBuilder, graph: &Graph, subject: &Term, uri: &Iri) {
    let rule = builder.class_rule(uri);
    // the first positive olo:index wins
    for triple in graph.statements_about(subject) {
        if triple.p != olo::INDEX {
            continue;
        }
        let Some(score) = int_object(&triple.o) else {
            continue;
        };
        if score <= 0 {
            continue;
        }
        rule.score = score;
        break;
    }
}

/// `ex:Alias spindle:expressedAs ex:Class`
fn compile_class_alias(builder: &mut RuleStoreBuilder, graph: &Graph, alias: &Iri, canonical: &Iri) {
    let alias_term = Term::Iri(alias.clone());
    let mut prominence = 0;
    for object in graph.objects_of(&alias_term, spindle::PROMINENCE) {
        if let Some(value) = int_object(object) {
            prominence = value;
            break;
        }
    }
    builder.class_rule(canonical).add_alias(alias.clone(), prominence);
}

/// `ex:prop rdf:type spindle:Property`
///
/// One pass over the subject's statements; where a property appears more
/// than once the later statement wins.
fn compile_predicate(builder: &mut RuleStoreBuilder, graph: &Graph, subject: &Term, uri: &Iri) {
    let rule = builder.predicate_rule(uri);
    for triple in graph.statements_about(subject) {
        match triple.p.as_str() {
            olo::INDEX => {
                if let Some(score) = int_object(&triple.o) {
                    if score > 0 {
                        rule.score = score;
                    }
                }
            }
            spindle::PROMINENCE => {
                if let Some(value) = int_object(&triple.o) {
                    if value != 0 {
                        rule.prominence = value;
                    }
                }
            }
            spindle::EXPECT => {
                let Some(object) = triple.o.as_iri() else {
                    continue;
                };
                match object.as_str() {
                    rdfs::LITERAL => rule.expected = ExpectedKind::Literal,
                    rdfs::RESOURCE => rule.expected = ExpectedKind::Uri,
                    other => tracing::warn!(
                        value = other,
                        predicate = %rule.target,
                        "unexpected spindle:expect value"
                    ),
                }
            }
            spindle::EXPECT_TYPE => {
                if let Some(datatype) = triple.o.as_iri() {
                    rule.datatype = Some(datatype.clone());
                }
            }
            spindle::PROXY_ONLY => {
                if let Some(flag) = boolean_object(&triple.o) {
                    rule.proxy_only = flag;
                }
            }
            spindle::INDEXED => {
                if let Some(flag) = boolean_object(&triple.o) {
                    rule.indexed = flag;
                }
            }
            spindle::INVERSE => {
                if let Some(flag) = boolean_object(&triple.o) {
                    rule.inverse = flag;
                }
            }
            _ => {}
        }
    }
}

/// `ex:source spindle:property [ ... ]` or `spindle:inverseProperty`
///
/// The bundle is usually a blank node. Without a `spindle:expressedAs`
/// target the bundle is not a match rule and is ignored entirely; with
/// `rdfs:domain` statements one match entry is added per resource domain,
/// otherwise a single unscoped entry.
fn compile_predicate_match(
    builder: &mut RuleStoreBuilder,
    graph: &Graph,
    source: &Iri,
    bundle: &Term,
    inverse: bool,
) {
    let mut priority = 100;
    let mut prominence = 0;
    let mut has_domain = false;
    let mut target: Option<Iri> = None;
    for triple in graph.statements_about(bundle) {
        match triple.p.as_str() {
            rdfs::DOMAIN => has_domain = true,
            olo::INDEX => {
                // zero is meaningful here: it marks an always-apply match
                if let Some(value) = int_object(&triple.o) {
                    if value >= 0 {
                        priority = value;
                    }
                }
            }
            spindle::PROMINENCE => {
                if let Some(value) = int_object(&triple.o) {
                    if value != 0 {
                        prominence = value;
                    }
                }
            }
            spindle::EXPRESSED_AS => {
                if let Some(object) = triple.o.as_iri() {
                    builder.predicate_rule(object);
                    target = Some(object.clone());
                }
            }
            _ => {}
        }
    }
    let Some(target) = target else {
        return;
    };
    builder.add_cached_predicate(source);
    if !has_domain {
        builder.predicate_rule(&target).add_match(PredicateMatch {
            source: source.clone(),
            only_for: None,
            priority,
            prominence,
            inverse,
        });
        return;
    }
    let domains: Vec<Iri> = graph
        .objects_of(bundle, rdfs::DOMAIN)
        .filter_map(|object| object.as_iri().cloned())
        .collect();
    let rule = builder.predicate_rule(&target);
    for domain in domains {
        rule.add_match(PredicateMatch {
            source: source.clone(),
            only_for: Some(domain),
            priority,
            prominence,
            inverse,
        });
    }
}

/// `ex:pred spindle:coref spindle:resourceMatch`
fn compile_coref(
    builder: &mut RuleStoreBuilder,
    match_types: &CorefMatchTypes,
    source: &Iri,
    object: &Term,
) {
    if match_types.is_empty() {
        return;
    }
    let Some(match_type) = object.as_iri() else {
        tracing::error!(
            predicate = %source,
            "spindle:coref statement expected a resource object"
        );
        return;
    };
    if !match_types.contains(match_type.as_str()) {
        tracing::error!(
            match_type = %match_type,
            "co-reference match type is not supported"
        );
        return;
    }
    builder.add_cached_predicate(source);
    builder.add_coref_rule(CorefRule {
        predicate: source.clone(),
        match_type: match_type.clone(),
    });
}

fn int_object(term: &Term) -> Option<i32> {
    term.as_literal().and_then(Literal::int_value)
}

// Flags must be typed exactly xsd:boolean. "true" sets the flag; any other
// lexical form clears it.
fn boolean_object(term: &Term) -> Option<bool> {
    let literal = term.as_literal()?;
    let datatype = literal.datatype.as_ref()?;
    if *datatype != xsd::BOOLEAN {
        return None;
    }
    Some(literal.as_str() == "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coref::ResourceMatch;
    use spindle_vocab::owl;
    use std::sync::Arc;

    const EX: &str = "http://example.org/";

    fn ex(name: &str) -> String {
        format!("{EX}{name}")
    }

    fn int_literal(value: i32) -> Term {
        Term::typed(value.to_string(), xsd::INTEGER)
    }

    fn compile(graph: &Graph) -> RuleStore {
        compile_rulebase(graph, &CorefMatchTypes::new())
    }

    fn compile_with_resource_match(graph: &Graph) -> RuleStore {
        let mut types = CorefMatchTypes::new();
        types.register(spindle::RESOURCE_MATCH, Arc::new(ResourceMatch));
        compile_rulebase(graph, &types)
    }

    #[test]
    fn vocab_classification() {
        assert_eq!(RuleVocab::classify(rdf::TYPE), RuleVocab::Type);
        assert_eq!(
            RuleVocab::classify(spindle::EXPRESSED_AS),
            RuleVocab::ExpressedAs
        );
        assert_eq!(RuleVocab::classify(spindle::PROPERTY), RuleVocab::Property);
        assert_eq!(
            RuleVocab::classify(spindle::INVERSE_PROPERTY),
            RuleVocab::InverseProperty
        );
        assert_eq!(RuleVocab::classify(spindle::COREF), RuleVocab::Coref);
        assert_eq!(RuleVocab::classify(rdfs::LABEL), RuleVocab::Other);
    }

    #[test]
    fn empty_graph_compiles_to_seeded_store() {
        let store = compile(&Graph::new());
        assert_eq!(store.class_count(), 0);
        assert_eq!(store.predicate_count(), 0);
        assert_eq!(store.cached_predicates().len(), 2);
        assert!(store.is_cached_predicate(rdf::TYPE));
        assert!(store.is_cached_predicate(owl::SAME_AS));
    }

    #[test]
    fn class_declaration_with_score() {
        let mut graph = Graph::new();
        graph.add_triple(Term::iri(ex("Person")), rdf::TYPE, Term::iri(spindle::CLASS));
        graph.add_triple(Term::iri(ex("Person")), olo::INDEX, int_literal(40));
        let store = compile(&graph);

        let rule = store.class(&ex("Person")).unwrap();
        assert_eq!(rule.score, 40);
        assert_eq!(rule.aliases.len(), 1);
        assert_eq!(rule.aliases[0].uri, Iri::new(ex("Person")));
    }

    #[test]
    fn class_score_takes_first_positive_value() {
        let mut graph = Graph::new();
        graph.add_triple(Term::iri(ex("Person")), rdf::TYPE, Term::iri(spindle::CLASS));
        graph.add_triple(Term::iri(ex("Person")), olo::INDEX, Term::plain("abc"));
        graph.add_triple(Term::iri(ex("Person")), olo::INDEX, int_literal(-5));
        graph.add_triple(Term::iri(ex("Person")), olo::INDEX, int_literal(0));
        graph.add_triple(Term::iri(ex("Person")), olo::INDEX, int_literal(7));
        graph.add_triple(Term::iri(ex("Person")), olo::INDEX, int_literal(9));
        let store = compile(&graph);
        assert_eq!(store.class(&ex("Person")).map(|r| r.score), Some(7));
    }

    #[test]
    fn class_without_index_keeps_default_score() {
        let mut graph = Graph::new();
        graph.add_triple(Term::iri(ex("Thing")), rdf::TYPE, Term::iri(spindle::CLASS));
        let store = compile(&graph);
        assert_eq!(store.class(&ex("Thing")).map(|r| r.score), Some(100));
    }

    #[test]
    fn expressed_as_adds_alias_with_prominence() {
        let mut graph = Graph::new();
        graph.add_triple(Term::iri(ex("Person")), rdf::TYPE, Term::iri(spindle::CLASS));
        graph.add_triple(
            Term::iri(ex("Human")),
            spindle::EXPRESSED_AS,
            Term::iri(ex("Person")),
        );
        graph.add_triple(Term::iri(ex("Human")), spindle::PROMINENCE, int_literal(15));
        let store = compile(&graph);

        let rule = store.class(&ex("Person")).unwrap();
        assert_eq!(rule.aliases.len(), 2);
        let alias = rule.matching_alias(&Iri::new(ex("Human"))).unwrap();
        assert_eq!(alias.prominence, 15);
    }

    #[test]
    fn alias_prominence_takes_first_parseable_value() {
        let mut graph = Graph::new();
        graph.add_triple(Term::iri(ex("Human")), spindle::PROMINENCE, Term::plain("x"));
        graph.add_triple(Term::iri(ex("Human")), spindle::PROMINENCE, int_literal(-3));
        graph.add_triple(Term::iri(ex("Human")), spindle::PROMINENCE, int_literal(8));
        graph.add_triple(
            Term::iri(ex("Human")),
            spindle::EXPRESSED_AS,
            Term::iri(ex("Person")),
        );
        let store = compile(&graph);

        // negative values parse, so -3 is taken and 8 never reached
        let rule = store.class(&ex("Person")).unwrap();
        let alias = rule.matching_alias(&Iri::new(ex("Human"))).unwrap();
        assert_eq!(alias.prominence, -3);
    }

    #[test]
    fn expressed_as_creates_the_class_rule_if_missing() {
        let mut graph = Graph::new();
        graph.add_triple(
            Term::iri(ex("Human")),
            spindle::EXPRESSED_AS,
            Term::iri(ex("Person")),
        );
        let store = compile(&graph);
        let rule = store.class(&ex("Person")).unwrap();
        assert_eq!(rule.score, 100);
        assert_eq!(rule.aliases.len(), 2);
    }

    #[test]
    fn property_declaration_full_flags() {
        let mut graph = Graph::new();
        let prop = Term::iri(ex("hasValue"));
        graph.add_triple(prop.clone(), rdf::TYPE, Term::iri(spindle::PROPERTY_CLASS));
        graph.add_triple(prop.clone(), olo::INDEX, int_literal(30));
        graph.add_triple(prop.clone(), spindle::EXPECT, Term::iri(rdfs::LITERAL));
        graph.add_triple(prop.clone(), spindle::EXPECT_TYPE, Term::iri(xsd::DECIMAL));
        graph.add_triple(prop.clone(), spindle::PROXY_ONLY, Term::typed("true", xsd::BOOLEAN));
        graph.add_triple(prop.clone(), spindle::INDEXED, Term::typed("true", xsd::BOOLEAN));
        graph.add_triple(prop.clone(), spindle::INVERSE, Term::typed("true", xsd::BOOLEAN));
        graph.add_triple(prop.clone(), spindle::PROMINENCE, int_literal(5));
        let store = compile(&graph);

        let rule = store.predicate(&ex("hasValue")).unwrap();
        assert_eq!(rule.score, 30);
        assert_eq!(rule.expected, ExpectedKind::Literal);
        assert_eq!(rule.datatype, Some(Iri::new(xsd::DECIMAL)));
        assert!(rule.proxy_only);
        assert!(rule.indexed);
        assert!(rule.inverse);
        assert_eq!(rule.prominence, 5);
        assert!(store.is_cached_predicate(&ex("hasValue")));
    }

    #[test]
    fn property_expect_resource_and_unknown_values() {
        let mut graph = Graph::new();
        let prop = Term::iri(ex("page"));
        graph.add_triple(prop.clone(), rdf::TYPE, Term::iri(spindle::PROPERTY_CLASS));
        graph.add_triple(prop.clone(), spindle::EXPECT, Term::iri(rdfs::RESOURCE));
        let store = compile(&graph);
        assert_eq!(
            store.predicate(&ex("page")).map(|r| r.expected),
            Some(ExpectedKind::Uri)
        );

        // an unrecognised expect value logs and leaves the kind unchanged
        let mut graph = Graph::new();
        let prop = Term::iri(ex("odd"));
        graph.add_triple(prop.clone(), rdf::TYPE, Term::iri(spindle::PROPERTY_CLASS));
        graph.add_triple(prop.clone(), spindle::EXPECT, Term::iri(ex("Widget")));
        let store = compile(&graph);
        assert_eq!(
            store.predicate(&ex("odd")).map(|r| r.expected),
            Some(ExpectedKind::Unknown)
        );
    }

    #[test]
    fn property_flags_require_boolean_typing() {
        let mut graph = Graph::new();
        let prop = Term::iri(ex("p"));
        graph.add_triple(prop.clone(), rdf::TYPE, Term::iri(spindle::PROPERTY_CLASS));
        graph.add_triple(prop.clone(), spindle::PROXY_ONLY, Term::typed("true", xsd::BOOLEAN));
        // untyped and non-boolean-typed literals leave the flag alone
        graph.add_triple(prop.clone(), spindle::PROXY_ONLY, Term::plain("false"));
        graph.add_triple(
            prop.clone(),
            spindle::PROXY_ONLY,
            Term::typed("false", xsd::STRING),
        );
        let store = compile(&graph);
        assert_eq!(store.predicate(&ex("p")).map(|r| r.proxy_only), Some(true));

        // an explicit boolean false overwrites, as does any non-"true" form
        let mut graph = Graph::new();
        graph.add_triple(prop.clone(), rdf::TYPE, Term::iri(spindle::PROPERTY_CLASS));
        graph.add_triple(prop.clone(), spindle::PROXY_ONLY, Term::typed("true", xsd::BOOLEAN));
        graph.add_triple(prop.clone(), spindle::PROXY_ONLY, Term::typed("yes", xsd::BOOLEAN));
        let store = compile(&graph);
        assert_eq!(store.predicate(&ex("p")).map(|r| r.proxy_only), Some(false));
    }

    #[test]
    fn match_bundle_unscoped() {
        let mut graph = Graph::new();
        let bundle = Term::blank("m1");
        graph.add_triple(Term::iri(ex("name")), spindle::PROPERTY, bundle.clone());
        graph.add_triple(bundle.clone(), spindle::EXPRESSED_AS, Term::iri(rdfs::LABEL));
        graph.add_triple(bundle.clone(), olo::INDEX, int_literal(5));
        graph.add_triple(bundle.clone(), spindle::PROMINENCE, int_literal(2));
        let store = compile(&graph);

        let rule = store.predicate(rdfs::LABEL).unwrap();
        assert_eq!(rule.matches.len(), 1);
        let entry = &rule.matches[0];
        assert_eq!(entry.source, Iri::new(ex("name")));
        assert_eq!(entry.only_for, None);
        assert_eq!(entry.priority, 5);
        assert_eq!(entry.prominence, 2);
        assert!(!entry.inverse);
        // both the source and the target predicate end up cached
        assert!(store.is_cached_predicate(&ex("name")));
        assert!(store.is_cached_predicate(rdfs::LABEL));
    }

    #[test]
    fn match_bundle_priority_zero_is_kept() {
        let mut graph = Graph::new();
        let bundle = Term::blank("m1");
        graph.add_triple(Term::iri(ex("name")), spindle::PROPERTY, bundle.clone());
        graph.add_triple(bundle.clone(), spindle::EXPRESSED_AS, Term::iri(rdfs::LABEL));
        graph.add_triple(bundle.clone(), olo::INDEX, int_literal(0));
        let store = compile(&graph);
        let rule = store.predicate(rdfs::LABEL).unwrap();
        assert_eq!(rule.matches[0].priority, 0);
    }

    #[test]
    fn match_bundle_with_domains() {
        let mut graph = Graph::new();
        let bundle = Term::blank("m1");
        graph.add_triple(Term::iri(ex("name")), spindle::PROPERTY, bundle.clone());
        graph.add_triple(bundle.clone(), spindle::EXPRESSED_AS, Term::iri(rdfs::LABEL));
        graph.add_triple(bundle.clone(), olo::INDEX, int_literal(4));
        graph.add_triple(bundle.clone(), rdfs::DOMAIN, Term::iri(ex("Person")));
        graph.add_triple(bundle.clone(), rdfs::DOMAIN, Term::iri(ex("Place")));
        let store = compile(&graph);

        let rule = store.predicate(rdfs::LABEL).unwrap();
        assert_eq!(rule.matches.len(), 2);
        assert_eq!(rule.matches[0].only_for, Some(Iri::new(ex("Person"))));
        assert_eq!(rule.matches[1].only_for, Some(Iri::new(ex("Place"))));
        assert!(rule.matches.iter().all(|m| m.priority == 4));
    }

    #[test]
    fn match_bundle_literal_domain_yields_no_entries() {
        let mut graph = Graph::new();
        let bundle = Term::blank("m1");
        graph.add_triple(Term::iri(ex("name")), spindle::PROPERTY, bundle.clone());
        graph.add_triple(bundle.clone(), spindle::EXPRESSED_AS, Term::iri(rdfs::LABEL));
        graph.add_triple(bundle.clone(), rdfs::DOMAIN, Term::plain("Person"));
        let store = compile(&graph);

        // the domain marks the bundle as scoped, but only resource domains
        // produce entries
        let rule = store.predicate(rdfs::LABEL).unwrap();
        assert!(rule.matches.is_empty());
    }

    #[test]
    fn match_bundle_without_target_is_ignored() {
        let mut graph = Graph::new();
        let bundle = Term::blank("m1");
        graph.add_triple(Term::iri(ex("name")), spindle::PROPERTY, bundle.clone());
        graph.add_triple(bundle.clone(), olo::INDEX, int_literal(5));
        let store = compile(&graph);
        assert_eq!(store.predicate_count(), 0);
        assert!(!store.is_cached_predicate(&ex("name")));
    }

    #[test]
    fn match_bundle_last_target_wins() {
        let mut graph = Graph::new();
        let bundle = Term::blank("m1");
        graph.add_triple(Term::iri(ex("name")), spindle::PROPERTY, bundle.clone());
        graph.add_triple(bundle.clone(), spindle::EXPRESSED_AS, Term::iri(ex("first")));
        graph.add_triple(bundle.clone(), spindle::EXPRESSED_AS, Term::iri(ex("second")));
        let store = compile(&graph);

        // both targets get rules, the match lands on the later one
        assert_eq!(store.predicate(&ex("first")).map(|r| r.matches.len()), Some(0));
        assert_eq!(store.predicate(&ex("second")).map(|r| r.matches.len()), Some(1));
    }

    #[test]
    fn inverse_property_bundle() {
        let mut graph = Graph::new();
        let bundle = Term::blank("m1");
        graph.add_triple(Term::iri(ex("partOf")), spindle::INVERSE_PROPERTY, bundle.clone());
        graph.add_triple(bundle.clone(), spindle::EXPRESSED_AS, Term::iri(ex("hasPart")));
        let store = compile(&graph);
        let rule = store.predicate(&ex("hasPart")).unwrap();
        assert_eq!(rule.matches.len(), 1);
        assert!(rule.matches[0].inverse);
    }

    #[test]
    fn named_bundle_node_works_like_a_blank_one() {
        let mut graph = Graph::new();
        let bundle = Term::iri(ex("match1"));
        graph.add_triple(Term::iri(ex("name")), spindle::PROPERTY, bundle.clone());
        graph.add_triple(bundle.clone(), spindle::EXPRESSED_AS, Term::iri(rdfs::LABEL));
        let store = compile(&graph);
        assert_eq!(
            store.predicate(rdfs::LABEL).map(|r| r.matches.len()),
            Some(1)
        );
        // a named bundle's expressedAs statement is also visible at the top
        // level, where it reads as a class alias
        assert!(store.class(rdfs::LABEL).is_some());
    }

    #[test]
    fn coref_with_registered_match_type() {
        let mut graph = Graph::new();
        graph.add_triple(
            Term::iri(ex("sameish")),
            spindle::COREF,
            Term::iri(spindle::RESOURCE_MATCH),
        );
        let store = compile_with_resource_match(&graph);

        let rule = store.coref_rule(&ex("sameish")).unwrap();
        assert_eq!(rule.match_type, Iri::new(spindle::RESOURCE_MATCH));
        assert!(store.is_cached_predicate(&ex("sameish")));
    }

    #[test]
    fn coref_with_unknown_match_type_is_dropped() {
        let mut graph = Graph::new();
        graph.add_triple(
            Term::iri(ex("sameish")),
            spindle::COREF,
            Term::iri(spindle::WIKIPEDIA_MATCH),
        );
        let store = compile_with_resource_match(&graph);
        assert!(store.coref_rule(&ex("sameish")).is_none());
        assert!(!store.is_cached_predicate(&ex("sameish")));
    }

    #[test]
    fn coref_ignored_without_any_match_types() {
        let mut graph = Graph::new();
        graph.add_triple(
            Term::iri(ex("sameish")),
            spindle::COREF,
            Term::iri(spindle::RESOURCE_MATCH),
        );
        let store = compile(&graph);
        assert_eq!(store.coref_rules().count(), 0);
        assert!(!store.is_cached_predicate(&ex("sameish")));
    }

    #[test]
    fn coref_literal_object_is_rejected() {
        let mut graph = Graph::new();
        graph.add_triple(Term::iri(ex("sameish")), spindle::COREF, Term::plain("x"));
        let store = compile_with_resource_match(&graph);
        assert_eq!(store.coref_rules().count(), 0);
    }

    #[test]
    fn repeated_statements_compile_once() {
        let mut once = Graph::new();
        once.add_triple(Term::iri(ex("Person")), rdf::TYPE, Term::iri(spindle::CLASS));
        once.add_triple(Term::iri(ex("Person")), olo::INDEX, int_literal(20));

        let mut twice = once.clone();
        twice.add_triple(Term::iri(ex("Person")), rdf::TYPE, Term::iri(spindle::CLASS));
        twice.add_triple(Term::iri(ex("Person")), olo::INDEX, int_literal(20));

        assert_eq!(compile(&once), compile(&twice));
    }

    #[test]
    fn compilation_is_deterministic() {
        let mut graph = Graph::new();
        graph.add_triple(Term::iri(ex("Person")), rdf::TYPE, Term::iri(spindle::CLASS));
        graph.add_triple(Term::iri(ex("Person")), olo::INDEX, int_literal(20));
        let bundle = Term::blank("m1");
        graph.add_triple(Term::iri(ex("name")), spindle::PROPERTY, bundle.clone());
        graph.add_triple(bundle.clone(), spindle::EXPRESSED_AS, Term::iri(rdfs::LABEL));

        let first = compile(&graph);
        let second = compile(&graph);
        assert_eq!(first, second);
        assert_eq!(first.dump(), second.dump());
    }
}
