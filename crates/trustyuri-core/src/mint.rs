//! Minting: turning a graph under a working base into a permanent trusty URI.

use crate::rdf::RDF_MODULE_ID;
use trustyuri_canonical::rdf::nquads;
use trustyuri_canonical::{ArtifactCode, Canonicalizer, Digest, Graph, ModuleTag, TrustyUri};

/// A freshly minted graph and its identifier.
#[derive(Debug, Clone)]
pub struct Minted {
    /// Permanent identifier, `prefix + RA + digest`.
    pub uri: TrustyUri,
    /// The graph with every self-reference resolved to `uri`.
    pub graph: Graph,
}

impl Minted {
    /// The rewritten graph as N-Quads.
    pub fn to_nquads(&self) -> String {
        nquads::write(&self.graph)
    }
}

/// Computes the `RA` artifact code for `graph` under `base` and rewrites the
/// graph with it.
///
/// ```rust
/// use trustyuri_canonical::{Canonicalizer, Graph, Quad, Term};
/// use trustyuri_core::mint;
///
/// let graph: Graph = [Quad::triple(
///     Term::iri("http://purl.org/nanopub/temp/demo/"),
///     Term::iri("http://www.w3.org/2000/01/rdf-schema#label"),
///     Term::string("demo"),
/// )]
/// .into_iter()
/// .collect();
///
/// let minted = mint(&graph, "http://purl.org/nanopub/temp/demo/", &Canonicalizer::default());
/// assert!(minted.uri.to_string().starts_with("http://purl.org/np/RA"));
/// ```
pub fn mint(graph: &Graph, base: &str, canonicalizer: &Canonicalizer) -> Minted {
    let canonical = canonicalizer.canonicalize(graph, base);
    let code = ArtifactCode::new(
        ModuleTag::new(RDF_MODULE_ID),
        Digest::compute(&canonical.bytes),
    );
    let rewritten = canonicalizer.transform(graph, base, &code.to_string());
    let prefix = canonicalizer.context(base).prefix().to_string();
    Minted {
        uri: TrustyUri::new(prefix, code),
        graph: rewritten,
    }
}
