//! The validated time-of-day value.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use super::phrase::speak;
use super::source::{SystemClock, TimeSource};
use crate::error::{ClockError, TimeField};

/// Latest valid hour.
pub const MAX_HOUR: u32 = 23;
/// Latest valid minute.
pub const MAX_MINUTE: u32 = 59;

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // One or two ASCII digits on each side of a single colon
    Regex::new(r"^(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{1,2})$")
        .unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

/// An hour and minute of the day.
///
/// Both fields are always in range: the only ways to obtain a value are the
/// validating [`TimeValue::new`], parsing, and reading a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue {
    hour: u32,
    minute: u32,
}

impl TimeValue {
    /// Create a time value, rejecting out-of-range fields.
    ///
    /// The hour is checked first, so when both fields are invalid the error
    /// names the hour.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::OutOfRange` if `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ClockError> {
        if hour > MAX_HOUR {
            return Err(ClockError::out_of_range(TimeField::Hours, hour));
        }
        if minute > MAX_MINUTE {
            return Err(ClockError::out_of_range(TimeField::Minutes, minute));
        }
        Ok(Self { hour, minute })
    }

    /// Parse an `H:M` / `HH:MM` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use talking_clock::TimeValue;
    ///
    /// let time = TimeValue::parse("3:30").unwrap();
    /// assert_eq!((time.hour(), time.minute()), (3, 30));
    /// assert_eq!(time.phrase(), "Half past three");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ClockError::Format` if the string is not one or two digits, a
    /// colon, and one or two digits, or `ClockError::OutOfRange` if the
    /// numbers are not a valid time of day.
    pub fn parse(text: &str) -> Result<Self, ClockError> {
        let caps = TIME_PATTERN.captures(text).ok_or(ClockError::Format)?;

        let hour = caps["hour"].parse().map_err(|_| ClockError::Format)?;
        let minute = caps["minute"].parse().map_err(|_| ClockError::Format)?;
        log::debug!("parsed {text:?} as hour={hour} minute={minute}");

        Self::new(hour, minute)
    }

    /// The current local time, read from the system clock.
    #[must_use]
    pub fn now() -> Self {
        Self::now_from(&SystemClock)
    }

    /// The current time according to the given source.
    #[must_use]
    pub fn now_from(source: &impl TimeSource) -> Self {
        Self::from(source.now())
    }

    /// Hour of the day, 0 to 23.
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of the hour, 0 to 59.
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// The spoken English phrase for this time, e.g. `"Ten to twelve"`.
    #[must_use]
    pub fn phrase(&self) -> String {
        speak(*self)
    }

    /// Zero-padded 24-hour representation, e.g. `"03:30"`.
    #[must_use]
    pub fn to_hhmm(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<NaiveTime> for TimeValue {
    fn from(time: NaiveTime) -> Self {
        // chrono keeps hour in 0..24 and minute in 0..60, leap seconds included
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl FromStr for TimeValue {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::source::FixedClock;

    #[test]
    fn test_new_valid_bounds() {
        assert!(TimeValue::new(0, 0).is_ok());
        assert!(TimeValue::new(23, 59).is_ok());
    }

    #[test]
    fn test_new_rejects_hour() {
        let err = TimeValue::new(24, 0).unwrap_err();
        assert!(matches!(
            err,
            ClockError::OutOfRange {
                field: TimeField::Hours,
                value: 24
            }
        ));
    }

    #[test]
    fn test_new_rejects_minute() {
        let err = TimeValue::new(5, 60).unwrap_err();
        assert!(matches!(
            err,
            ClockError::OutOfRange {
                field: TimeField::Minutes,
                value: 60
            }
        ));
    }

    #[test]
    fn test_new_hour_takes_priority() {
        let err = TimeValue::new(30, 75).unwrap_err();
        assert_eq!(err.to_string(), "Value 30 for hours is incorrect");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(TimeValue::parse("00:00").unwrap(), TimeValue::new(0, 0).unwrap());
        assert_eq!(TimeValue::parse("3:30").unwrap(), TimeValue::new(3, 30).unwrap());
        assert_eq!(TimeValue::parse("11:50").unwrap(), TimeValue::new(11, 50).unwrap());
        assert_eq!(TimeValue::parse("23:59").unwrap(), TimeValue::new(23, 59).unwrap());
        assert_eq!(TimeValue::parse("7:5").unwrap(), TimeValue::new(7, 5).unwrap());
    }

    #[test]
    fn test_parse_wrong_format() {
        for input in ["abc", "12-30", "", ":", "1:", ":30", "123:00", "12:000", " 3:30", "3:30 ", "3:30:00", "3.30"] {
            assert!(
                matches!(TimeValue::parse(input), Err(ClockError::Format)),
                "{input:?} should be a format error"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode decimals but not accepted
        assert!(matches!(TimeValue::parse("٣:٣٠"), Err(ClockError::Format)));
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = TimeValue::parse("24:00").unwrap_err();
        assert_eq!(err.to_string(), "Value 24 for hours is incorrect");

        let err = TimeValue::parse("12:60").unwrap_err();
        assert_eq!(err.to_string(), "Value 60 for minutes is incorrect");

        let err = TimeValue::parse("99:99").unwrap_err();
        assert_eq!(err.to_string(), "Value 99 for hours is incorrect");
    }

    #[test]
    fn test_from_str() {
        let time: TimeValue = "12:15".parse().unwrap();
        assert_eq!(time.hour(), 12);
        assert_eq!(time.minute(), 15);
    }

    #[test]
    fn test_now_from_source() {
        let source = FixedClock::new(NaiveTime::from_hms_opt(16, 45, 12).unwrap());
        assert_eq!(TimeValue::now_from(&source), TimeValue::new(16, 45).unwrap());
    }

    #[test]
    fn test_now_in_range() {
        let now = TimeValue::now();
        assert!(now.hour() <= MAX_HOUR);
        assert!(now.minute() <= MAX_MINUTE);
    }

    #[test]
    fn test_to_hhmm() {
        assert_eq!(TimeValue::new(3, 5).unwrap().to_hhmm(), "03:05");
        assert_eq!(TimeValue::new(23, 59).unwrap().to_hhmm(), "23:59");
    }

    #[test]
    fn test_display_is_phrase() {
        assert_eq!(TimeValue::new(3, 30).unwrap().to_string(), "Half past three");
    }
}
