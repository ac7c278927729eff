//! Homework core
//!
//! Domain types and pure logic shared by the review API client and the bot:
//! - Domain: submissions, verdicts, report state, polling cursor
//! - Response validation: shape checks on the raw API payload
//! - Status formatting: turns a submission into a notification message
//!
//! Nothing in this crate performs I/O.

pub mod domain;
pub mod error;
pub mod response;
pub mod status;

pub use domain::cursor::Cursor;
pub use domain::report::{NO_PENDING_WORK, ReportState};
pub use domain::submission::Submission;
pub use domain::verdict::Verdict;
pub use error::ValidationError;
pub use response::{check_response, current_date};
pub use status::parse_status;
