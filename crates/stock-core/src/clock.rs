//! Timestamp sources for new entries.
//!
//! Entries carry their creation time as a display string, not a parsed
//! instant, so the clock decides the format once at creation.

use chrono::Local;

/// Default display format for entry timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Produces the creation timestamp stamped onto new entries.
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// Wall-clock time in the host's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn timestamp(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// A clock that always returns the same string. Used by tests and replays.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
