//! Canonical form of RDF graphs for hashing.
//!
//! Given a graph and the base identifier it is hashed under, the canonical
//! form is independent of statement order, of auto-generated blank node
//! labels and of the artifact code that will end up in the identifier.
//! Identifiers in the base namespace are rewritten to `prefix + code` (plus
//! `#suffix` for local names), blank nodes become `prefix + code + "#_" + n`,
//! and everything outside the namespace is left untouched.

use super::graph::Graph;
use super::nquads;
use super::term::{BlankId, Quad, Term};
use crate::digest::Digest;
use std::collections::{HashMap, HashSet};

/// Stand-in for the artifact code inside the hashed form.
pub const PLACEHOLDER: &str = " ";
/// Permanent prefix for identifiers minted from a temporary base.
pub const DEFAULT_PUBLICATION_PREFIX: &str = "http://purl.org/np/";
/// Prefix marking a temporary working identifier.
pub const DEFAULT_TEMP_PREFIX: &str = "http://purl.org/nanopub/temp/";
/// Length of blank node labels produced by automatic generation.
const AUTO_BLANK_LEN: usize = 33;

/// Sequential numbering of blank nodes, in first-seen order.
///
/// Scoped to one canonicalization call; never shared between graphs.
#[derive(Debug, Default)]
pub struct BlankNodeMap {
    numbers: HashMap<BlankId, usize>,
}

impl BlankNodeMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number for `id`, assigning the next one on first sight.
    pub fn number(&mut self, id: &BlankId) -> usize {
        let next = self.numbers.len() + 1;
        *self.numbers.entry(id.clone()).or_insert(next)
    }

    /// Number of distinct blank nodes seen.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// True if no blank node has been numbered.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Returns true for labels shaped like automatic generation output.
pub fn is_generated_label(label: &str) -> bool {
    label.len() == AUTO_BLANK_LEN && label.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Rewriting rules derived from one base identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseContext {
    base: String,
    root: String,
    prefix: String,
}

impl BaseContext {
    /// The base identifier as given.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The base without one trailing `#` or `/`.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Prefix the artifact code is appended to.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Rewrites an IRI relative to the base.
    pub fn rewrite_iri(&self, iri: &str, code: &str) -> String {
        if iri == self.root {
            return format!("{}{}", self.prefix, code);
        }
        match iri.strip_prefix(self.base.as_str()) {
            None => iri.to_string(),
            Some("") => format!("{}{}", self.prefix, code),
            Some(suffix) => format!("{}{}#{}", self.prefix, code, suffix),
        }
    }

    /// Rewrites a blank node into the minted namespace.
    ///
    /// Generated labels are renumbered through `blanks`; labels chosen by
    /// the producer are kept.
    pub fn rewrite_blank(&self, id: &BlankId, code: &str, blanks: &mut BlankNodeMap) -> String {
        if is_generated_label(id.as_str()) {
            format!("{}{}#_{}", self.prefix, code, blanks.number(id))
        } else {
            format!("{}{}#_{}", self.prefix, code, id.as_str())
        }
    }

    fn rewrite_term(&self, term: &Term, code: &str, blanks: &mut BlankNodeMap) -> Term {
        match term {
            Term::Iri(iri) => Term::iri(self.rewrite_iri(iri, code)),
            Term::BlankNode(id) => Term::iri(self.rewrite_blank(id, code, blanks)),
            Term::Literal(_) => term.clone(),
        }
    }
}

/// Replaces every blank node with a generated label through `f`.
fn map_generated(quad: &Quad, f: impl Fn(&BlankId) -> Term) -> Quad {
    let map = |term: &Term| match term.as_blank() {
        Some(id) if is_generated_label(id.as_str()) => f(id),
        _ => term.clone(),
    };
    Quad {
        graph: quad.graph.as_ref().map(&map),
        subject: map(&quad.subject),
        predicate: map(&quad.predicate),
        object: map(&quad.object),
    }
}

/// Computes a label-independent signature for each generated blank node.
///
/// A node starts from the sorted quads that mention it, written with the
/// node itself as `_:a` and every other generated node as `_:z`. Each round
/// folds in the neighbours' signatures from the previous round, until the
/// number of distinct signatures stops growing. Nodes left with equal
/// signatures are interchangeable as far as the quads can tell.
fn blank_signatures(quads: &[Quad]) -> HashMap<BlankId, String> {
    let mut mentions: HashMap<BlankId, Vec<&Quad>> = HashMap::new();
    for quad in quads {
        for term in quad.terms() {
            let Some(id) = term.as_blank() else { continue };
            if !is_generated_label(id.as_str()) {
                continue;
            }
            let seen = mentions.entry(id.clone()).or_default();
            if !seen.last().is_some_and(|q| std::ptr::eq(*q, quad)) {
                seen.push(quad);
            }
        }
    }

    let mut signatures: HashMap<BlankId, String> = mentions
        .keys()
        .map(|id| (id.clone(), String::new()))
        .collect();
    let mut classes = 0;
    loop {
        let next: HashMap<BlankId, String> = mentions
            .iter()
            .map(|(id, mentioned)| {
                let mut lines: Vec<String> = mentioned
                    .iter()
                    .map(|quad| {
                        let masked = map_generated(quad, |other| {
                            if other == id {
                                Term::blank("a")
                            } else {
                                Term::blank(format!("z{}", signatures[other]))
                            }
                        });
                        let mut line = String::new();
                        nquads::write_quad(&masked, &mut line);
                        line
                    })
                    .collect();
                lines.sort();
                let mut input = signatures[id].clone();
                input.extend(lines);
                (id.clone(), Digest::compute(input.as_bytes()).to_string())
            })
            .collect();
        let distinct = next.values().collect::<HashSet<_>>().len();
        signatures = next;
        if distinct == classes {
            return signatures;
        }
        classes = distinct;
    }
}

/// Result of canonicalization.
#[derive(Debug)]
pub struct CanonicalizationResult {
    /// Canonical UTF-8 bytes for the graph.
    pub bytes: Vec<u8>,
    /// Number of distinct quads after rewriting.
    pub quad_count: usize,
    /// Number of renumbered blank nodes.
    pub blank_nodes: usize,
}

/// Canonicalizer that emits deterministic bytes for RDF graphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonicalizer {
    publication_prefix: String,
    temp_prefix: String,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLICATION_PREFIX, DEFAULT_TEMP_PREFIX)
    }
}

impl Canonicalizer {
    /// Creates a canonicalizer with explicit publication and temporary prefixes.
    pub fn new(publication_prefix: impl Into<String>, temp_prefix: impl Into<String>) -> Self {
        Self {
            publication_prefix: publication_prefix.into(),
            temp_prefix: temp_prefix.into(),
        }
    }

    /// Prefix substituted for temporary bases.
    pub fn publication_prefix(&self) -> &str {
        &self.publication_prefix
    }

    /// Prefix that marks a temporary base.
    pub fn temp_prefix(&self) -> &str {
        &self.temp_prefix
    }

    /// Derives root and prefix for `base`.
    pub fn context(&self, base: &str) -> BaseContext {
        let root = base
            .strip_suffix('#')
            .or_else(|| base.strip_suffix('/'))
            .unwrap_or(base);
        let prefix = if base.starts_with(&self.temp_prefix) {
            self.publication_prefix.clone()
        } else {
            match base.rfind('/') {
                Some(idx) => format!("{}/", &base[..idx]),
                None => "/".to_string(),
            }
        };
        BaseContext {
            base: base.to_string(),
            root: root.to_string(),
            prefix,
        }
    }

    /// Rewrites every quad of `graph` under `base`, embedding `code`.
    ///
    /// Non-IRI graph names are dropped to the default graph. The result is
    /// sorted and free of duplicates.
    pub fn transform(&self, graph: &Graph, base: &str, code: &str) -> Graph {
        let (rewritten, _) = self.transform_counted(graph, base, code);
        rewritten
    }

    fn transform_counted(&self, graph: &Graph, base: &str, code: &str) -> (Graph, usize) {
        let ctx = self.context(base);

        let mut quads: Vec<Quad> = graph
            .iter()
            .map(|quad| Quad {
                graph: quad.graph.clone().filter(|g| g.as_iri().is_some()),
                ..quad.clone()
            })
            .collect();
        quads.sort();
        quads.dedup();

        // Generated labels only break ties between nodes with equal signatures.
        let signatures = blank_signatures(&quads);
        let mut keyed: Vec<(Quad, Quad)> = quads
            .into_iter()
            .map(|quad| {
                let key = map_generated(&quad, |id| Term::blank(&signatures[id]));
                (key, quad)
            })
            .collect();
        keyed.sort();
        let quads: Vec<Quad> = keyed.into_iter().map(|(_, quad)| quad).collect();

        let mut blanks = BlankNodeMap::new();
        let mut rewritten: Graph = quads
            .iter()
            .map(|quad| Quad {
                graph: quad
                    .graph
                    .as_ref()
                    .map(|g| ctx.rewrite_term(g, code, &mut blanks)),
                subject: ctx.rewrite_term(&quad.subject, code, &mut blanks),
                predicate: ctx.rewrite_term(&quad.predicate, code, &mut blanks),
                object: ctx.rewrite_term(&quad.object, code, &mut blanks),
            })
            .collect();
        rewritten.dedupe();
        (rewritten, blanks.len())
    }

    /// Produces the bytes that are hashed when minting under `base`.
    pub fn canonicalize(&self, graph: &Graph, base: &str) -> CanonicalizationResult {
        let (rewritten, blank_nodes) = self.transform_counted(graph, base, PLACEHOLDER);
        CanonicalizationResult {
            bytes: nquads::write(&rewritten).into_bytes(),
            quad_count: rewritten.len(),
            blank_nodes,
        }
    }
}

/// Replaces `code` inside IRI terms with [`PLACEHOLDER`].
///
/// Applied to an already minted graph this yields the graph that was hashed
/// at mint time. Literals are never rewritten, even if they contain `code`.
pub fn normalize(graph: &Graph, code: &str) -> Graph {
    let swap = |term: &Term| match term {
        Term::Iri(iri) if iri.contains(code) => Term::iri(iri.replace(code, PLACEHOLDER)),
        _ => term.clone(),
    };
    let mut normalized: Graph = graph
        .iter()
        .map(|quad| Quad {
            graph: quad.graph.as_ref().map(swap),
            subject: swap(&quad.subject),
            predicate: swap(&quad.predicate),
            object: swap(&quad.object),
        })
        .collect();
    normalized.dedupe();
    normalized
}

/// Writes a graph in canonical statement order.
pub fn serialize(graph: &Graph) -> Vec<u8> {
    let mut sorted = graph.clone();
    sorted.dedupe();
    nquads::write(&sorted).into_bytes()
}
