//! Single-resource verification: tail, module, content, recomputed digest.

use crate::errors::TrustyError;
use crate::loader::ResourceLoader;
use crate::module::TrustyModule;
use crate::registry::ModuleRegistry;
use crate::resource::Resource;
use trustyuri_canonical::{get_tail, ArtifactCode};

/// Outcome of checking one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The recomputed digest equals the declared one.
    Correct(ArtifactCode),
    /// The content does not hash to the declared code.
    Incorrect(ArtifactCode),
}

impl Verdict {
    /// True for [`Verdict::Correct`].
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct(_))
    }

    /// The declared artifact code.
    pub fn code(&self) -> &ArtifactCode {
        match self {
            Verdict::Correct(code) | Verdict::Incorrect(code) => code,
        }
    }
}

/// Checks resources against the code embedded in their name.
pub struct Verifier<'a, L> {
    registry: &'a ModuleRegistry,
    loader: L,
}

impl<'a, L: ResourceLoader> Verifier<'a, L> {
    /// Creates a verifier over a populated registry.
    pub fn new(registry: &'a ModuleRegistry, loader: L) -> Self {
        Self { registry, loader }
    }

    /// Verifies the resource behind `reference`.
    ///
    /// The tail is extracted and its module resolved before any content is
    /// loaded, so malformed or unknown identifiers fail without I/O.
    ///
    /// # Errors
    ///
    /// [`TrustyError::MalformedIdentifier`], [`TrustyError::UnknownModule`],
    /// [`TrustyError::ResourceUnavailable`] or [`TrustyError::InvalidContent`].
    /// A digest mismatch is reported as [`Verdict::Incorrect`].
    pub fn check(&self, reference: &str) -> Result<Verdict, TrustyError> {
        let tail = get_tail(reference)?;
        let module = self.registry.resolve(tail.tag().as_ref())?;
        let content = self.loader.load(reference)?;
        let resource = Resource::new(reference, content, tail);
        self.check_resource(module, resource)
    }

    /// Verifies content that is already in memory.
    pub fn check_loaded(&self, resource: Resource) -> Result<Verdict, TrustyError> {
        let module = self.registry.resolve(resource.tail().tag().as_ref())?;
        self.check_resource(module, resource)
    }

    fn check_resource(
        &self,
        module: &dyn TrustyModule,
        resource: Resource,
    ) -> Result<Verdict, TrustyError> {
        let correct = module.has_correct_hash(&resource)?;
        let code = resource.tail().clone();
        Ok(if correct {
            Verdict::Correct(code)
        } else {
            Verdict::Incorrect(code)
        })
    }
}
