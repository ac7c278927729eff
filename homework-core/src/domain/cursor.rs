//! Polling cursor

/// Unix timestamp (seconds) passed to the API as `from_date`
///
/// Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(i64);

impl Cursor {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    /// Cursor at the current wall-clock time
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp())
    }

    pub fn timestamp(&self) -> i64 {
        self.0
    }

    /// Moves the cursor to `timestamp` if it is newer
    ///
    /// Returns `true` when the cursor moved.
    pub fn advance(&mut self, timestamp: i64) -> bool {
        if timestamp > self.0 {
            self.0 = timestamp;
            true
        } else {
            false
        }
    }
}
