use thiserror::Error;
use trustyuri_canonical::rdf::ParseError;
use trustyuri_canonical::ValidationError;

/// Errors surfaced by registration, minting and verification.
///
/// A hash mismatch is not an error; see [`crate::Verdict`].
#[derive(Error, Debug)]
pub enum TrustyError {
    /// The artifact code could not be located or has the wrong shape.
    #[error("malformed identifier: {0}")]
    MalformedIdentifier(#[from] ValidationError),
    /// No module is registered under the tag.
    #[error("no module registered for tag '{0}'")]
    UnknownModule(String),
    /// A second module tried to claim a registered tag.
    #[error("module '{0}' is already registered")]
    DuplicateModule(String),
    /// The backing content could not be loaded.
    #[error("resource '{reference}' is unavailable: {reason}")]
    ResourceUnavailable {
        /// Path or URL that was requested.
        reference: String,
        /// Underlying read or network failure.
        reason: String,
    },
    /// Loaded content cannot be canonicalized by the resolved module.
    #[error("invalid content: {0}")]
    InvalidContent(String),
}

impl From<ParseError> for TrustyError {
    fn from(err: ParseError) -> Self {
        TrustyError::InvalidContent(err.to_string())
    }
}
