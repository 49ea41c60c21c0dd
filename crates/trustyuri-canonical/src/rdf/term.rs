//! RDF terms and quads.
//!
//! A term is an IRI, a blank node or a literal. Terms are totally ordered so
//! that a list of quads can be sorted into a deterministic sequence:
//! IRIs sort before blank nodes, blank nodes before literals, and literals
//! compare by lexical value, then datatype, then language tag.

use std::fmt;
use std::sync::Arc;

/// Blank node label, stored without the `_:` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Creates a blank node ID from a label.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Label without prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// Literal value with optional datatype IRI and language tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Lexical form.
    pub value: Arc<str>,
    /// Datatype IRI, absent for plain literals.
    pub datatype: Option<Arc<str>>,
    /// Language tag, absent unless the literal is language-tagged.
    pub language: Option<Arc<str>>,
}

/// An RDF term in any quad position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// Expanded IRI.
    Iri(Arc<str>),
    /// Blank node.
    BlankNode(BlankId),
    /// Literal.
    Literal(Literal),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// Creates a blank node term.
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::BlankNode(BlankId::new(label))
    }

    /// Creates a plain literal.
    pub fn string(value: impl AsRef<str>) -> Self {
        Term::Literal(Literal {
            value: Arc::from(value.as_ref()),
            datatype: None,
            language: None,
        })
    }

    /// Creates a literal with an explicit datatype.
    pub fn typed(value: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Term::Literal(Literal {
            value: Arc::from(value.as_ref()),
            datatype: Some(Arc::from(datatype.as_ref())),
            language: None,
        })
    }

    /// Creates a language-tagged literal.
    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Term::Literal(Literal {
            value: Arc::from(value.as_ref()),
            datatype: None,
            language: Some(Arc::from(lang.as_ref())),
        })
    }

    /// Returns the IRI string if this is an IRI.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the blank node ID if this is a blank node.
    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Term::BlankNode(id) => Some(id),
            _ => None,
        }
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }
}

/// A statement, optionally placed in a named graph.
///
/// Field order is the sort order: graph, subject, predicate, object.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quad {
    /// Named graph, `None` for the default graph.
    pub graph: Option<Term>,
    /// Subject (IRI or blank node).
    pub subject: Term,
    /// Predicate (IRI).
    pub predicate: Term,
    /// Object.
    pub object: Term,
}

impl Quad {
    /// Creates a quad.
    pub fn new(graph: Option<Term>, subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            graph,
            subject,
            predicate,
            object,
        }
    }

    /// Creates a quad in the default graph.
    pub fn triple(subject: Term, predicate: Term, object: Term) -> Self {
        Self::new(None, subject, predicate, object)
    }

    /// Terms in graph, subject, predicate, object order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.graph
            .iter()
            .chain([&self.subject, &self.predicate, &self.object])
    }
}
