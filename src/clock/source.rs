//! Where the current time comes from.

use chrono::{Local, NaiveTime};

/// A source of the current wall-clock time.
#[cfg_attr(test, mockall::automock)]
pub trait TimeSource {
    /// The current local time of day.
    fn now(&self) -> NaiveTime;
}

/// Reads the operating system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveTime {
        let now = Local::now().time();
        log::debug!("system clock reads {now}");
        now
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveTime);

impl FixedClock {
    /// Create a clock stuck at `time`.
    #[must_use]
    pub const fn new(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
