use crate::errors::TrustyError;
use crate::file::FileModule;
use crate::module::TrustyModule;
use crate::rdf::RdfModule;
use std::collections::BTreeMap;
use std::sync::Arc;
use trustyuri_canonical::{Canonicalizer, ModuleTag};

/// Dispatch table from module tag to module.
///
/// Populated during startup, then only read. Lookups take `&self`, so a
/// registry can be shared across threads once registration is done.
#[derive(Default, Clone)]
pub struct ModuleRegistry {
    modules: BTreeMap<ModuleTag, Arc<dyn TrustyModule>>,
}

impl ModuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the `FA` and `RA` modules.
    pub fn with_defaults(canonicalizer: Canonicalizer) -> Self {
        let mut registry = Self::new();
        let defaults: [Arc<dyn TrustyModule>; 2] = [
            Arc::new(FileModule),
            Arc::new(RdfModule::new(canonicalizer)),
        ];
        for module in defaults {
            let tag = module.module_id();
            registry.modules.insert(tag, module);
        }
        registry
    }

    /// Adds a module under its own tag.
    ///
    /// # Errors
    ///
    /// Returns [`TrustyError::DuplicateModule`] if the tag is taken.
    pub fn register(&mut self, module: impl TrustyModule + 'static) -> Result<(), TrustyError> {
        let tag = module.module_id();
        if self.modules.contains_key(&tag) {
            return Err(TrustyError::DuplicateModule(tag.to_string()));
        }
        self.modules.insert(tag, Arc::new(module));
        Ok(())
    }

    /// Looks up the module for `tag` (exact, case-sensitive match).
    ///
    /// # Errors
    ///
    /// Returns [`TrustyError::UnknownModule`] if nothing is registered.
    pub fn resolve(&self, tag: &str) -> Result<&dyn TrustyModule, TrustyError> {
        self.modules
            .get(&ModuleTag::new(tag))
            .map(|module| module.as_ref())
            .ok_or_else(|| TrustyError::UnknownModule(tag.to_string()))
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> impl Iterator<Item = &ModuleTag> {
        self.modules.keys()
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("tags", &self.modules.keys().collect::<Vec<_>>())
            .finish()
    }
}
