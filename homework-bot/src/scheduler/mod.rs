//! Scheduler layer for the bot
//!
//! Drives the poll cycle: fetch, validate, diff against the last report,
//! notify on change, sleep, repeat.

pub mod poller;

pub use poller::HomeworkPoller;
