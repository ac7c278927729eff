//! Report state
//!
//! The last reported submission name and status. The poller compares the
//! pending state with the stored one and only notifies on a difference.

use crate::domain::submission::Submission;

/// Message sent when the API reports no submissions since the cursor
pub const NO_PENDING_WORK: &str = "Нет работ на проверке.";

/// Last reported submission name and status output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportState {
    pub name: Option<String>,
    pub output: String,
}

impl ReportState {
    /// State for a cycle that found a submission
    pub fn from_submission(submission: &Submission) -> Self {
        Self {
            name: submission.homework_name.clone(),
            output: submission.status.clone().unwrap_or_default(),
        }
    }

    /// State for a cycle with an empty `homeworks` list
    pub fn no_pending_work() -> Self {
        Self {
            name: None,
            output: NO_PENDING_WORK.to_string(),
        }
    }
}
