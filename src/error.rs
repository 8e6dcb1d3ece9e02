//! Error types for talking-clock.

use std::fmt;

use thiserror::Error;

/// The component of a time value that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    /// Hour of the day.
    Hours,
    /// Minute of the hour.
    Minutes,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
        })
    }
}

/// Errors that can occur while telling the time.
#[derive(Debug, Error)]
pub enum ClockError {
    /// The input string is not of the form `H:M`.
    #[error("Wrong time format")]
    Format,

    /// An hour or minute is outside its valid range.
    #[error("Value {value} for {field} is incorrect")]
    OutOfRange {
        /// Which field was rejected.
        field: TimeField,
        /// The rejected value.
        value: u32,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClockError {
    /// Build a range error for the given field.
    #[must_use]
    pub const fn out_of_range(field: TimeField, value: u32) -> Self {
        Self::OutOfRange { field, value }
    }
}
