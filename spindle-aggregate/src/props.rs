//! Property candidate fusion
//!
//! Walks every statement of an entity's combined source data, matches it
//! against the predicate rules, keeps the best candidate per target
//! predicate (or per language tag for plain literals), and materializes
//! the winners into the entry's merged output.

use std::collections::BTreeMap;

use spindle_graph_ir::{Graph, Iri, Literal, Term, Triple};
use spindle_rulebase::{ExpectedKind, PredicateMatch, PredicateRule, RuleStore};
use spindle_vocab::{dcterms, geo, rdf, rdfs, xsd};

use crate::config::AggregateConfig;
use crate::entry::ProxyEntry;
use crate::error::AggregateResult;
use crate::locate::ProxyLocator;

/// Best-so-far state for one predicate rule
///
/// Single-valued rules (URI-expecting, or literal-expecting with a declared
/// datatype) compete for `slot`; plain-literal rules compete per normalized
/// language tag in `literals`. Lower priority wins, and a challenger must be
/// strictly better to displace a held value, so the state distinguishes
/// "nothing held yet" from every real priority.
#[derive(Clone, Debug, Default)]
struct MatchState {
    slot: Option<(Term, i32)>,
    literals: BTreeMap<String, LangCandidate>,
    prominence: i32,
}

#[derive(Clone, Debug)]
struct LangCandidate {
    literal: Literal,
    priority: i32,
}

/// Fuse an entity's source statements into its proxy entry
///
/// Statements qualify when their subject is one of the entry's
/// co-references (forward direction, object is the candidate value) or
/// their object is (inverse direction, subject is the candidate value);
/// `rdf:type` statements never qualify in the inverse direction. Each
/// qualifying statement is offered to every predicate rule whose match list
/// carries an entry for its predicate in the right direction, buffered
/// best-candidate-per-rule, then materialized.
///
/// Class resolution should run first: domain-restricted matches compare
/// against the entry's resolved class.
///
/// The only failure is a host [`ProxyLocator`] error, which aborts the
/// whole fuse; per-candidate problems are logged and skipped.
pub fn update_entry(
    entry: &mut ProxyEntry,
    source: &Graph,
    rules: &RuleStore,
    config: &AggregateConfig,
    locator: &dyn ProxyLocator,
) -> AggregateResult<()> {
    let states = rules.predicates().map(|_| MatchState::default()).collect();
    let mut fuser = Fuser {
        entry: &mut *entry,
        rules,
        config,
        locator,
        states,
    };
    fuser.scan(source)?;
    fuser.apply();

    if entry.title.is_none() && entry.title_en.is_none() {
        entry.title = synthesize_title(entry.uri.as_str(), &config.root);
    }
    Ok(())
}

struct Fuser<'a> {
    entry: &'a mut ProxyEntry,
    rules: &'a RuleStore,
    config: &'a AggregateConfig,
    locator: &'a dyn ProxyLocator,
    states: Vec<MatchState>,
}

impl Fuser<'_> {
    fn scan(&mut self, source: &Graph) -> AggregateResult<()> {
        for triple in source.iter() {
            if let Some(subject) = triple.s.as_iri() {
                if self.entry.has_ref(subject.as_str()) {
                    self.test_statement(&triple.p, &triple.o, false)?;
                    continue;
                }
            }
            // Type statements describe their subject and nothing else;
            // naming the entity as a type is not a candidate.
            if triple.p.as_str() == rdf::TYPE {
                continue;
            }
            if let Some(object) = triple.o.as_iri() {
                if self.entry.has_ref(object.as_str()) {
                    self.test_statement(&triple.p, &triple.s, true)?;
                }
            }
        }
        Ok(())
    }

    /// Offer one candidate statement to every rule that matches it
    ///
    /// Within a rule, the first match entry that passes the direction,
    /// class, and predicate filters claims the statement; one candidate
    /// evaluation per rule, whatever its outcome.
    fn test_statement(&mut self, predicate: &Iri, value: &Term, inverse: bool) -> AggregateResult<()> {
        let rules = self.rules;
        for (idx, rule) in rules.predicates().enumerate() {
            for entry in &rule.matches {
                if entry.inverse != inverse {
                    continue;
                }
                if let Some(class) = &entry.only_for {
                    match self.entry.classname() {
                        Some(resolved) if resolved == class => {}
                        _ => continue,
                    }
                }
                if entry.source != *predicate {
                    continue;
                }
                self.candidate(rule, idx, entry, value)?;
                break;
            }
        }
        Ok(())
    }

    fn candidate(
        &mut self,
        rule: &PredicateRule,
        idx: usize,
        criterion: &PredicateMatch,
        value: &Term,
    ) -> AggregateResult<bool> {
        match rule.expected {
            ExpectedKind::Unknown => Ok(false),
            ExpectedKind::Uri => match value.as_iri() {
                Some(uri) => self.candidate_uri(rule, idx, criterion, uri),
                None => Ok(false),
            },
            ExpectedKind::Literal => match value.as_literal() {
                Some(literal) => Ok(self.candidate_literal(rule, idx, criterion, literal)),
                None => Ok(false),
            },
        }
    }

    fn candidate_uri(
        &mut self,
        rule: &PredicateRule,
        idx: usize,
        criterion: &PredicateMatch,
        obj: &Iri,
    ) -> AggregateResult<bool> {
        if let Some((_, held)) = &self.states[idx].slot {
            if *held <= criterion.priority {
                return Ok(false);
            }
        }

        let value = if rule.proxy_only {
            // Only values the host already aggregates may pass, and they
            // pass as their proxy, not as themselves.
            match self.locator.locate(obj.as_str())? {
                None => return Ok(false),
                Some(proxy) if proxy == *self.entry.uri() => return Ok(false),
                Some(proxy) => Term::Iri(proxy),
            }
        } else {
            Term::Iri(obj.clone())
        };

        if criterion.priority == 0 {
            // An always-apply match bypasses the slot and lands in the
            // output at once.
            let triple = Triple::new(self.entry.self_term(), rule.target.clone(), value);
            self.entry.add_proxy_statement(triple);
            self.entry.deduct(rule.prominence_for(criterion));
            return Ok(true);
        }

        let state = &mut self.states[idx];
        state.slot = Some((value, criterion.priority));
        state.prominence = rule.prominence_for(criterion);
        Ok(true)
    }

    fn candidate_literal(
        &mut self,
        rule: &PredicateRule,
        idx: usize,
        criterion: &PredicateMatch,
        literal: &Literal,
    ) -> bool {
        let Some(declared) = &rule.datatype else {
            return self.candidate_lang(rule, idx, criterion, literal);
        };

        if let Some((_, held)) = &self.states[idx].slot {
            if *held <= criterion.priority {
                return false;
            }
        }

        let accepted = match &literal.datatype {
            Some(datatype) => {
                datatype == declared
                    || (declared.as_str() == xsd::DECIMAL
                        && xsd::is_integer_family(datatype.as_str()))
            }
            // A bare literal is taken on faith; a language-tagged one
            // cannot satisfy a datatype expectation.
            None => literal.language().is_none(),
        };
        if !accepted {
            return false;
        }

        let state = &mut self.states[idx];
        state.slot = Some((
            Term::typed(literal.as_str(), declared.clone()),
            criterion.priority,
        ));
        state.prominence = rule.prominence_for(criterion);
        true
    }

    fn candidate_lang(
        &mut self,
        rule: &PredicateRule,
        idx: usize,
        criterion: &PredicateMatch,
        literal: &Literal,
    ) -> bool {
        let key = match literal.language() {
            None => String::new(),
            Some(tag) => match normalize_language_tag(tag) {
                Some(normalized) => normalized,
                None => {
                    tracing::warn!(
                        tag,
                        predicate = %rule.target,
                        "ignoring candidate with unsupported language tag"
                    );
                    return false;
                }
            },
        };

        let state = &mut self.states[idx];
        if let Some(existing) = state.literals.get(&key) {
            if existing.priority <= criterion.priority {
                return false;
            }
        }
        state.literals.insert(
            key.clone(),
            LangCandidate {
                literal: literal.clone(),
                priority: criterion.priority,
            },
        );
        state.prominence = rule.prominence_for(criterion);

        if rule.target == self.config.title_predicate {
            if key == "en" {
                self.entry.title_en = Some(literal.as_str().to_owned());
            } else if key.is_empty() {
                self.entry.title = Some(literal.as_str().to_owned());
            }
        }
        true
    }

    /// Materialize every rule's winners into the entry
    ///
    /// Each rule contributes its accumulated prominence deduction, its slot
    /// value if one survived, and one literal per language bucket. Indexed,
    /// non-inverse rules also duplicate their statements into the root
    /// graph in multigraph mode.
    fn apply(&mut self) {
        let rules = self.rules;
        let states = std::mem::take(&mut self.states);
        for (rule, state) in rules.predicates().zip(states) {
            self.entry.deduct(state.prominence);

            let index_to_root = self.config.multigraph && rule.indexed && !rule.inverse;
            let self_term = self.entry.self_term();

            if let Some((value, _)) = state.slot {
                self.capture_geo(rule, &value);
                let triple = Triple::new(self_term.clone(), rule.target.clone(), value);
                if index_to_root {
                    self.entry.add_root_statement(triple.clone());
                }
                self.entry.add_proxy_statement(triple);
            }

            for candidate in state.literals.values() {
                let triple = Triple::new(
                    self_term.clone(),
                    rule.target.clone(),
                    Term::Literal(candidate.literal.clone()),
                );
                if index_to_root {
                    self.entry.add_root_statement(triple.clone());
                }
                self.entry.add_proxy_statement(triple);
            }

            if rule.target == rdfs::LABEL {
                self.entry.titles = literal_texts(&state.literals);
            } else if rule.target == dcterms::DESCRIPTION {
                self.entry.descriptions = literal_texts(&state.literals);
            }
        }
    }

    fn capture_geo(&mut self, rule: &PredicateRule, value: &Term) {
        if rule.target != geo::LAT && rule.target != geo::LONG {
            return;
        }
        let Some(literal) = value.as_literal() else {
            return;
        };
        if !literal.is_typed(xsd::DECIMAL) {
            return;
        }
        let Ok(parsed) = literal.as_str().parse::<f64>() else {
            return;
        };
        if rule.target == geo::LAT {
            self.entry.latitude = Some(parsed);
        } else {
            self.entry.longitude = Some(parsed);
        }
    }
}

fn literal_texts(literals: &BTreeMap<String, LangCandidate>) -> BTreeMap<String, String> {
    literals
        .iter()
        .map(|(lang, candidate)| (lang.clone(), candidate.literal.as_str().to_owned()))
        .collect()
}

/// Normalize a language tag to the engine's canonical form
///
/// Canonical means ASCII lowercase with hyphens: `EN_GB` becomes `en-gb`.
/// Tags must be 2 to 7 characters drawn from letters, `-`, and `_`;
/// anything else, including otherwise valid BCP-47 tags such as `es-419`,
/// is unsupported.
fn normalize_language_tag(tag: &str) -> Option<String> {
    if tag.len() < 2 || tag.len() > 7 {
        return None;
    }
    if !tag
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == '-' || c == '_')
    {
        return None;
    }
    Some(
        tag.chars()
            .map(|c| if c == '_' { '-' } else { c.to_ascii_lowercase() })
            .collect(),
    )
}

/// Derive a title from the entry URI when no literal provided one
///
/// Strips the configured root prefix while keeping the path boundary, and
/// drops any fragment: with root `http://example.com/`, the URI
/// `http://example.com/about#id` yields `/about`. URIs outside the root
/// are used whole.
fn synthesize_title(uri: &str, root: &str) -> Option<String> {
    let mut tail = uri;
    if !root.is_empty() {
        if let Some(rest) = uri.strip_prefix(root) {
            let boundary = root.len() - 1;
            tail = if rest.starts_with('/') || !uri.is_char_boundary(boundary) {
                rest
            } else {
                &uri[boundary..]
            };
        }
    }
    let tail = match tail.split_once('#') {
        Some((head, _)) => head,
        None => tail,
    };
    if tail.is_empty() {
        None
    } else {
        Some(tail.to_owned())
    }
}
