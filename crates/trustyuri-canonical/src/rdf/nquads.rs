//! Line-based N-Quads reader and writer (N-Triples is accepted as a subset).

use super::graph::Graph;
use super::term::{Literal, Quad, Term};
use std::fmt::Write as _;
use std::sync::Arc;
use thiserror::Error;

/// Error raised while reading N-Quads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    /// What went wrong.
    pub message: String,
}

/// Parses an N-Quads document into a graph.
///
/// Blank lines and `#` comments are skipped. Quads are kept in document order.
pub fn parse(input: &str) -> Result<Graph, ParseError> {
    let mut graph = Graph::new();
    for (idx, line) in input.lines().enumerate() {
        let mut parser = LineParser {
            rest: line,
            line: idx + 1,
        };
        if let Some(quad) = parser.statement()? {
            graph.add(quad);
        }
    }
    Ok(graph)
}

/// Writes quads one per line as `subject predicate object [graph] .`.
pub fn write(graph: &Graph) -> String {
    let mut out = String::new();
    for quad in graph {
        write_quad(quad, &mut out);
    }
    out
}

/// Appends a single quad line to `out`.
pub fn write_quad(quad: &Quad, out: &mut String) {
    write_term(&quad.subject, out);
    out.push(' ');
    write_term(&quad.predicate, out);
    out.push(' ');
    write_term(&quad.object, out);
    if let Some(graph) = &quad.graph {
        out.push(' ');
        write_term(graph, out);
    }
    out.push_str(" .\n");
}

fn write_term(term: &Term, out: &mut String) {
    match term {
        Term::Iri(iri) => {
            out.push('<');
            out.push_str(iri);
            out.push('>');
        }
        Term::BlankNode(id) => {
            let _ = write!(out, "{id}");
        }
        Term::Literal(literal) => {
            out.push('"');
            escape_into(&literal.value, out);
            out.push('"');
            if let Some(lang) = &literal.language {
                out.push('@');
                out.push_str(lang);
            } else if let Some(datatype) = &literal.datatype {
                out.push_str("^^<");
                out.push_str(datatype);
                out.push('>');
            }
        }
    }
}

fn escape_into(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
}

struct LineParser<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> LineParser<'a> {
    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            line: self.line,
            message: message.into(),
        }
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start_matches([' ', '\t']);
    }

    fn statement(&mut self) -> Result<Option<Quad>, ParseError> {
        self.skip_ws();
        if self.rest.is_empty() || self.rest.starts_with('#') {
            return Ok(None);
        }

        let subject = self.term()?;
        if subject.is_literal() {
            return Err(self.error("subject must be an IRI or blank node"));
        }
        let predicate = self.term()?;
        if predicate.as_iri().is_none() {
            return Err(self.error("predicate must be an IRI"));
        }
        let object = self.term()?;

        self.skip_ws();
        let graph = if self.rest.starts_with('.') {
            None
        } else {
            let graph = self.term()?;
            if graph.is_literal() {
                return Err(self.error("graph name must be an IRI or blank node"));
            }
            Some(graph)
        };

        self.skip_ws();
        self.rest = self
            .rest
            .strip_prefix('.')
            .ok_or_else(|| self.error("expected '.' at end of statement"))?;
        self.skip_ws();
        if !(self.rest.is_empty() || self.rest.starts_with('#')) {
            return Err(self.error(format!("unexpected trailing content '{}'", self.rest)));
        }

        Ok(Some(Quad::new(graph, subject, predicate, object)))
    }

    fn term(&mut self) -> Result<Term, ParseError> {
        self.skip_ws();
        match self.rest.chars().next() {
            Some('<') => Ok(Term::iri(self.iri()?)),
            Some('_') => self.blank(),
            Some('"') => self.literal(),
            Some(c) => Err(self.error(format!("unexpected character '{c}'"))),
            None => Err(self.error("unexpected end of line")),
        }
    }

    fn iri(&mut self) -> Result<String, ParseError> {
        let rest: &'a str = self.rest;
        let body = &rest[1..];
        let end = body
            .find('>')
            .ok_or_else(|| self.error("unterminated IRI"))?;
        let iri = unescape(&body[..end]).map_err(|m| self.error(m))?;
        // IRIs are written back unescaped, so they must stay within IRIREF.
        if let Some(c) = iri.chars().find(|c| !is_iri_char(*c)) {
            return Err(self.error(format!("character {c:?} is not allowed in an IRI")));
        }
        self.rest = &body[end + 1..];
        Ok(iri)
    }

    fn blank(&mut self) -> Result<Term, ParseError> {
        let rest: &'a str = self.rest;
        let body = rest
            .strip_prefix("_:")
            .ok_or_else(|| self.error("expected '_:' blank node prefix"))?;
        let end = body
            .find(|c: char| c.is_whitespace() || c == '<' || c == '"')
            .unwrap_or(body.len());
        // A label may contain '.' but never ends with one.
        let label = body[..end].trim_end_matches('.');
        if label.is_empty() {
            return Err(self.error("empty blank node label"));
        }
        self.rest = &body[label.len()..];
        Ok(Term::blank(label))
    }

    fn literal(&mut self) -> Result<Term, ParseError> {
        let rest: &'a str = self.rest;
        let body = &rest[1..];
        let mut end = None;
        let mut escaped = false;
        for (idx, c) in body.char_indices() {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => {
                    end = Some(idx);
                    break;
                }
                _ => {}
            }
        }
        let end = end.ok_or_else(|| self.error("unterminated literal"))?;
        let value = unescape(&body[..end]).map_err(|m| self.error(m))?;
        self.rest = &body[end + 1..];

        let mut literal = Literal {
            value: Arc::from(value),
            datatype: None,
            language: None,
        };
        if let Some(after) = self.rest.strip_prefix("^^") {
            self.rest = after;
            if !self.rest.starts_with('<') {
                return Err(self.error("expected datatype IRI after '^^'"));
            }
            literal.datatype = Some(Arc::from(self.iri()?));
        } else if let Some(after) = self.rest.strip_prefix('@') {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
                .unwrap_or(after.len());
            if end == 0 {
                return Err(self.error("empty language tag"));
            }
            literal.language = Some(Arc::from(&after[..end]));
            self.rest = &after[end..];
        }
        Ok(Term::Literal(literal))
    }
}

fn is_iri_char(c: char) -> bool {
    c > ' ' && !matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
}

fn unescape(raw: &str) -> Result<String, String> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some('u') => out.push(hex_char(&mut chars, 4)?),
            Some('U') => out.push(hex_char(&mut chars, 8)?),
            Some(other) => return Err(format!("invalid escape '\\{other}'")),
            None => return Err("dangling '\\'".to_string()),
        }
    }
    Ok(out)
}

fn hex_char(chars: &mut std::str::Chars<'_>, digits: usize) -> Result<char, String> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.len() != digits {
        return Err(format!("truncated unicode escape '{hex}'"));
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| format!("invalid unicode escape '{hex}'"))
}
