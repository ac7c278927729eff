//! Repository layer
//!
//! Trait-based access to the review API so the poller can be exercised
//! against scripted responses in tests.

mod homeworks;

pub use homeworks::{HomeworkRepository, HttpHomeworkRepository};
