use crate::errors::TrustyError;
use trustyuri_canonical::{get_tail, ArtifactCode};

/// Content under verification together with the code it claims.
///
/// Created per verification call; the content is never modified.
#[derive(Debug, Clone)]
pub struct Resource {
    reference: String,
    content: Vec<u8>,
    tail: ArtifactCode,
}

impl Resource {
    /// Pairs loaded content with an already extracted tail.
    pub fn new(reference: impl Into<String>, content: Vec<u8>, tail: ArtifactCode) -> Self {
        Self {
            reference: reference.into(),
            content,
            tail,
        }
    }

    /// Extracts the tail from `reference` and pairs it with `content`.
    pub fn from_reference(
        reference: impl Into<String>,
        content: Vec<u8>,
    ) -> Result<Self, TrustyError> {
        let reference = reference.into();
        let tail = get_tail(&reference)?;
        Ok(Self::new(reference, content, tail))
    }

    /// Path or URL the content was loaded from.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Raw bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Declared artifact code.
    pub fn tail(&self) -> &ArtifactCode {
        &self.tail
    }
}
