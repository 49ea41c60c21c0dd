//! Layered configuration: built-in defaults, an optional TOML file, then
//! `TRUSTY_*` environment variables.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use trustyuri_canonical::rdf::{DEFAULT_PUBLICATION_PREFIX, DEFAULT_TEMP_PREFIX};
use trustyuri_canonical::Canonicalizer;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrustyConfig {
    /// Prefix minted URIs get when the base is temporary.
    pub publication_prefix: String,
    /// Bases starting with this are treated as temporary.
    pub temp_prefix: String,
}

impl Default for TrustyConfig {
    fn default() -> Self {
        Self {
            publication_prefix: DEFAULT_PUBLICATION_PREFIX.to_string(),
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
        }
    }
}

impl TrustyConfig {
    /// Layered providers, lowest precedence first.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut fig = Figment::from(Serialized::defaults(TrustyConfig::default()));
        if let Some(file) = file {
            fig = fig.merge(Toml::file(file));
        }
        fig.merge(Env::prefixed("TRUSTY_"))
    }

    /// Loads the configuration. A file that was asked for must exist.
    pub fn load(file: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(file) = file {
            if !file.is_file() {
                return Err(format!("config file {} not found", file.display()).into());
            }
        }
        Ok(Self::figment(file).extract()?)
    }

    /// Canonicalizer using the configured prefixes.
    pub fn canonicalizer(&self) -> Canonicalizer {
        Canonicalizer::new(&self.publication_prefix, &self.temp_prefix)
    }
}
