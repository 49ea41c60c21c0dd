//! Minting and verification of trusty URIs.
//!
//! This crate provides:
//! - The [`TrustyModule`] trait and the [`ModuleRegistry`] dispatching on
//!   two-character module tags
//! - The `FA` (flat file) and `RA` (RDF graph) modules
//! - Minting of permanent identifiers for graphs assembled under a
//!   temporary base
//! - The [`Verifier`], which recomputes a resource's digest and compares it
//!   with the code in its name
//!
//! Nothing here logs; every failure is returned as a [`TrustyError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use trustyuri_canonical::Canonicalizer;
//! use trustyuri_core::{FileModule, ModuleRegistry, Resource, Verdict, Verifier, DefaultLoader};
//!
//! let registry = ModuleRegistry::with_defaults(Canonicalizer::default());
//! let content = b"hello".to_vec();
//! let code = FileModule.mint(&content);
//!
//! let resource = Resource::new(format!("hello.{code}.txt"), content, code.clone());
//! let verifier = Verifier::new(&registry, DefaultLoader::new());
//! assert_eq!(verifier.check_loaded(resource)?, Verdict::Correct(code));
//! # Ok::<(), trustyuri_core::TrustyError>(())
//! ```
#![deny(missing_docs)]

/// Error types for core operations.
pub mod errors;
/// The `FA` module.
pub mod file;
/// Resource loading.
pub mod loader;
/// Minting of RDF graphs.
pub mod mint;
/// The module trait.
pub mod module;
/// The `RA` module.
pub mod rdf;
/// Tag to module dispatch.
pub mod registry;
/// Resources under verification.
pub mod resource;
/// Verification entry point.
pub mod verifier;

pub use errors::TrustyError;
pub use file::{FileModule, FILE_MODULE_ID};
pub use loader::{DefaultLoader, ResourceLoader};
pub use mint::{mint, Minted};
pub use module::TrustyModule;
pub use rdf::{RdfFormat, RdfModule, RDF_MODULE_ID};
pub use registry::ModuleRegistry;
pub use resource::Resource;
pub use verifier::{Verdict, Verifier};
