//! Output formatting for talking-clock.
//!
//! This module provides formatters for displaying spoken times in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::clock::TimeValue;
use crate::error::ClockError;

pub use json::*;
pub use pretty::*;

/// Format a time based on output format
///
/// # Errors
///
/// Returns `ClockError::Json` if JSON serialization fails.
pub fn format_time(time: &TimeValue, format: OutputFormat) -> Result<String, ClockError> {
    match format {
        OutputFormat::Pretty => Ok(format_time_pretty(time)),
        OutputFormat::Json => format_time_json(time),
    }
}

/// Format an error based on output format
///
/// Falls back to the plain message if the error cannot be serialized.
#[must_use]
pub fn format_error(err: &ClockError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => format_error_pretty(err),
        OutputFormat::Json => format_error_json(err).unwrap_or_else(|_| err.to_string()),
    }
}
