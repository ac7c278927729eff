//! Status formatting
//!
//! Builds the notification text for a single submission.

use crate::domain::submission::Submission;
use crate::domain::verdict::Verdict;
use crate::error::ValidationError;

/// Formats the status change message for a submission
///
/// Fails when the submission has no name, no status, or a status outside the
/// verdict table. No partial message is produced on failure.
pub fn parse_status(submission: &Submission) -> Result<String, ValidationError> {
    let name = submission
        .homework_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            ValidationError::InvalidSubmission("API response has no 'homework_name'".to_string())
        })?;

    let status = submission
        .status
        .as_deref()
        .filter(|status| !status.is_empty())
        .ok_or_else(|| {
            ValidationError::InvalidSubmission(format!(
                "API returned no status for homework \"{}\"",
                name
            ))
        })?;

    let verdict = Verdict::from_code(status).ok_or_else(|| {
        ValidationError::InvalidSubmission(format!(
            "unknown status for homework \"{}\": {}",
            name, status
        ))
    })?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        verdict.text()
    ))
}
