use colored::Colorize;

use crate::clock::TimeValue;
use crate::error::ClockError;

/// Format a time as its spoken phrase
#[must_use]
pub fn format_time_pretty(time: &TimeValue) -> String {
    time.phrase().bold().to_string()
}

/// Format an error message
#[must_use]
pub fn format_error_pretty(err: &ClockError) -> String {
    err.to_string().red().to_string()
}
