//! RDF graph model, N-Quads I/O and the canonical form used by the `RA` module.

/// Canonical form of graphs under a base identifier.
pub mod canonicalizer;
/// Quad collections.
pub mod graph;
/// N-Quads reading and writing.
pub mod nquads;
/// Terms and quads.
pub mod term;

pub use canonicalizer::{
    is_generated_label, normalize, serialize, BaseContext, BlankNodeMap, CanonicalizationResult,
    Canonicalizer, DEFAULT_PUBLICATION_PREFIX, DEFAULT_TEMP_PREFIX, PLACEHOLDER,
};
pub use graph::Graph;
pub use nquads::ParseError;
pub use term::{BlankId, Literal, Quad, Term};
