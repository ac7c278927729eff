//! Domain types for homework review tracking

pub mod cursor;
pub mod report;
pub mod submission;
pub mod verdict;
