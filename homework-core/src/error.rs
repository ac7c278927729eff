//! Validation errors for API payloads and submissions

use thiserror::Error;

/// Errors raised while checking an API response or a single submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The payload has the wrong JSON type (not an object, or `homeworks` not a list)
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    /// A required top-level key is absent from an otherwise well-formed response
    #[error("Empty response from API: key '{0}' is missing")]
    EmptyResponse(&'static str),

    /// A submission lacks a name or status, or carries an unknown status
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),
}
