//! Command implementations for talking-clock.

use crate::cli::args::OutputFormat;
use crate::clock::{TimeSource, TimeValue};
use crate::error::ClockError;
use crate::output::{format_error, format_time};

/// Resolve the time to speak: the given `H:M` string, or the source's now.
///
/// # Errors
///
/// Returns an error if `time` is malformed or out of range.
pub fn resolve_time(source: &impl TimeSource, time: Option<&str>) -> Result<TimeValue, ClockError> {
    time.map_or_else(|| Ok(TimeValue::now_from(source)), TimeValue::parse)
}

/// Execute the tell command.
///
/// Failures are rendered in the requested format rather than returned, so
/// the result is always something to print.
pub fn tell(source: &impl TimeSource, time: Option<&str>, format: OutputFormat) -> String {
    match resolve_time(source, time).and_then(|t| format_time(&t, format)) {
        Ok(output) => output,
        Err(e) => {
            log::debug!("tell failed: {e:?}");
            format_error(&e, format)
        }
    }
}
