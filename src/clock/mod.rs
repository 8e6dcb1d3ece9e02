//! Time values and their spoken form.

mod phrase;
mod source;
mod time;

pub use source::{FixedClock, SystemClock, TimeSource};
#[cfg(test)]
pub use source::MockTimeSource;
pub use time::{TimeValue, MAX_HOUR, MAX_MINUTE};
