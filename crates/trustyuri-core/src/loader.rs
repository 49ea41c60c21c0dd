//! Loading resource bytes from a local path or an HTTP(S) URL.

use crate::errors::TrustyError;
use std::path::Path;
use url::Url;

/// Source of resource bytes.
pub trait ResourceLoader {
    /// Returns the raw bytes behind `reference`.
    fn load(&self, reference: &str) -> Result<Vec<u8>, TrustyError>;
}

/// Reads local files, falling back to HTTP(S) for URLs.
///
/// No retry and no timeout beyond the client defaults.
#[derive(Debug, Default)]
pub struct DefaultLoader {
    client: reqwest::blocking::Client,
}

impl DefaultLoader {
    /// Creates a loader with a default HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    fn fetch(&self, reference: &str, url: Url) -> Result<Vec<u8>, TrustyError> {
        let unavailable = |reason: String| TrustyError::ResourceUnavailable {
            reference: reference.to_string(),
            reason,
        };
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| unavailable(e.to_string()))?;
        let body = response.bytes().map_err(|e| unavailable(e.to_string()))?;
        Ok(body.to_vec())
    }
}

impl ResourceLoader for DefaultLoader {
    fn load(&self, reference: &str) -> Result<Vec<u8>, TrustyError> {
        match std::fs::read(Path::new(reference)) {
            Ok(bytes) => Ok(bytes),
            Err(io_err) => match Url::parse(reference) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => self.fetch(reference, url),
                _ => Err(TrustyError::ResourceUnavailable {
                    reference: reference.to_string(),
                    reason: io_err.to_string(),
                }),
            },
        }
    }
}
