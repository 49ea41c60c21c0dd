//! `RA` module: RDF graphs in N-Quads or N-Triples.

use crate::errors::TrustyError;
use crate::mint::{mint, Minted};
use crate::module::TrustyModule;
use crate::resource::Resource;
use trustyuri_canonical::rdf::{normalize, nquads, serialize};
use trustyuri_canonical::{Canonicalizer, Graph, ModuleTag};

/// Tag reserved for RDF graphs.
pub const RDF_MODULE_ID: &str = "RA";

/// Serialization formats, guessed from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// `.nq`, and the fallback when there is no recognizable extension.
    NQuads,
    /// `.nt`
    NTriples,
}

impl RdfFormat {
    /// Guesses the format of `reference` from its extension.
    ///
    /// Formats that have to be converted to N-Quads first (`.trig`, `.ttl`,
    /// `.rdf`, `.xml`, `.jsonld`) are rejected.
    pub fn guess(reference: &str) -> Result<Self, TrustyError> {
        let path = reference.split(['?', '#']).next().unwrap_or_default();
        let segment = path.rsplit('/').next().unwrap_or(path);
        let ext = segment
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("nt") => Ok(RdfFormat::NTriples),
            Some(ext @ ("trig" | "ttl" | "rdf" | "xml" | "jsonld" | "trix")) => Err(
                TrustyError::InvalidContent(format!("unsupported RDF format '.{ext}'")),
            ),
            _ => Ok(RdfFormat::NQuads),
        }
    }
}

/// RDF graph resources.
#[derive(Debug, Clone, Default)]
pub struct RdfModule {
    canonicalizer: Canonicalizer,
}

impl RdfModule {
    /// Creates the module with the prefixes used for minting.
    pub fn new(canonicalizer: Canonicalizer) -> Self {
        Self { canonicalizer }
    }

    /// Canonicalizer used for minting.
    pub fn canonicalizer(&self) -> &Canonicalizer {
        &self.canonicalizer
    }

    /// Reads the graph held by a resource.
    pub fn read_graph(&self, resource: &Resource) -> Result<Graph, TrustyError> {
        let format = RdfFormat::guess(resource.reference())?;
        let text = std::str::from_utf8(resource.content())
            .map_err(|e| TrustyError::InvalidContent(format!("content is not UTF-8: {e}")))?;
        let graph = nquads::parse(text)?;
        if format == RdfFormat::NTriples && graph.iter().any(|q| q.graph.is_some()) {
            return Err(TrustyError::InvalidContent(
                "N-Triples content contains a named graph".to_string(),
            ));
        }
        Ok(graph)
    }

    /// Mints a permanent identifier for `graph` assembled under `base`.
    pub fn mint(&self, graph: &Graph, base: &str) -> Minted {
        mint(graph, base, &self.canonicalizer)
    }
}

impl TrustyModule for RdfModule {
    fn module_id(&self) -> ModuleTag {
        ModuleTag::new(RDF_MODULE_ID)
    }

    fn canonicalize(&self, resource: &Resource) -> Result<Vec<u8>, TrustyError> {
        let graph = self.read_graph(resource)?;
        let code = resource.tail().to_string();
        Ok(serialize(&normalize(&graph, &code)))
    }
}
