//! `FA` module: the raw bytes of a file are its canonical form.

use crate::errors::TrustyError;
use crate::module::TrustyModule;
use crate::resource::Resource;
use trustyuri_canonical::{ArtifactCode, Digest, ModuleTag};

/// Tag reserved for plain files.
pub const FILE_MODULE_ID: &str = "FA";

/// Flat-file resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileModule;

impl FileModule {
    /// Computes the `FA` artifact code of `content`.
    pub fn mint(&self, content: &[u8]) -> ArtifactCode {
        ArtifactCode::new(ModuleTag::new(FILE_MODULE_ID), Digest::compute(content))
    }
}

impl TrustyModule for FileModule {
    fn module_id(&self) -> ModuleTag {
        ModuleTag::new(FILE_MODULE_ID)
    }

    fn canonicalize(&self, resource: &Resource) -> Result<Vec<u8>, TrustyError> {
        Ok(resource.content().to_vec())
    }
}
