//! JSON output formatting for talking-clock.

use serde::Serialize;
use serde_json::json;

use crate::clock::TimeValue;
use crate::error::ClockError;

/// A spoken time as emitted in JSON.
#[derive(Debug, Serialize)]
pub struct TimeReport {
    /// Zero-padded `HH:MM`.
    pub time: String,
    pub hour: u32,
    pub minute: u32,
    /// The spoken phrase.
    pub phrase: String,
}

impl From<&TimeValue> for TimeReport {
    fn from(time: &TimeValue) -> Self {
        Self {
            time: time.to_hhmm(),
            hour: time.hour(),
            minute: time.minute(),
            phrase: time.phrase(),
        }
    }
}

/// Format a time as JSON
///
/// # Errors
///
/// Returns `ClockError::Json` if JSON serialization fails.
pub fn format_time_json(time: &TimeValue) -> Result<String, ClockError> {
    Ok(serde_json::to_string_pretty(&TimeReport::from(time))?)
}

/// Format an error as JSON
///
/// # Errors
///
/// Returns `ClockError::Json` if JSON serialization fails.
pub fn format_error_json(err: &ClockError) -> Result<String, ClockError> {
    let output = json!({
        "error": err.to_string(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
