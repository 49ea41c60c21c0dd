//! Primitives for self-certifying identifiers ("trusty URIs").
//!
//! A trusty URI ends in an artifact code: a two-character module tag
//! followed by a SHA-256 digest of the resource's canonical form, encoded
//! as unpadded base64url. This crate holds everything that participates in
//! computing that code: the digest engine, the URI codec and the RDF
//! canonical form.
//!
#![deny(missing_docs)]

/// Digest/identifier primitives.
pub mod digest;
/// Module tags and artifact codes.
pub mod identifiers;
/// RDF terms, N-Quads and graph canonicalization.
pub mod rdf;
/// Trusty URI layout.
pub mod uri;
/// Validation helpers used by canonical types.
pub mod validation;

pub use digest::{Digest, DigestAlg, DIGEST_LEN};
pub use identifiers::{ArtifactCode, ModuleTag, TAG_LEN, TAIL_LEN};
pub use rdf::{Canonicalizer, Graph, Quad, Term};
pub use uri::{build, get_tail, tag_of, TrustyUri};
pub use validation::ValidationError;
