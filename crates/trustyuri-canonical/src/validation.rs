use thiserror::Error;

/// Validation errors for digests, tags and identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When no trusty URI tail can be located in an identifier.
    #[error("no artifact code found in '{identifier}': {reason}")]
    MalformedIdentifier {
        /// Identifier that was inspected.
        identifier: String,
        /// What was missing.
        reason: &'static str,
    },
}
