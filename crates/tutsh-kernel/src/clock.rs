//! Wall-clock access for timestamps and `date`.

use chrono::{Local, NaiveDateTime};

/// Display format for every timestamp: `Jul 25 10:00`.
pub const TIMESTAMP_FORMAT: &str = "%b %d %H:%M";

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current local time.
    fn now(&self) -> NaiveDateTime;

    /// Current time in [`TIMESTAMP_FORMAT`].
    fn stamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// The system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant. Used by tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
