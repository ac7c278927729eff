//! Submission domain type

use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;

/// One homework record from the `homeworks` list
///
/// Both fields are optional so that a missing name or status can be reported
/// precisely when the submission is formatted. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Submission {
    pub fn new(homework_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(homework_name.into()),
            status: Some(status.into()),
        }
    }

    /// Reads a submission from one element of the `homeworks` list
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::deserialize(value).map_err(|e| {
            ValidationError::InvalidSubmission(format!("cannot read submission {}: {}", value, e))
        })
    }
}
