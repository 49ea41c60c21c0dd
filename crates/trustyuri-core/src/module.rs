use crate::errors::TrustyError;
use crate::resource::Resource;
use trustyuri_canonical::{Digest, ModuleTag};

/// A resource kind: how to canonicalize it and how to check its code.
///
/// Implementations are registered once in a [`crate::ModuleRegistry`] and
/// shared read-only afterwards.
pub trait TrustyModule: Send + Sync {
    /// Two-character tag this module answers to.
    fn module_id(&self) -> ModuleTag;

    /// Canonical bytes of the resource, as hashed for its artifact code.
    fn canonicalize(&self, resource: &Resource) -> Result<Vec<u8>, TrustyError>;

    /// Recomputes the digest and compares it with the declared one.
    fn has_correct_hash(&self, resource: &Resource) -> Result<bool, TrustyError> {
        let bytes = self.canonicalize(resource)?;
        Ok(Digest::compute(&bytes).as_str() == resource.tail().digest().as_str())
    }
}
