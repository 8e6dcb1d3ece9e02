//! Spoken English rendering of a time of day.
//!
//! Times are read on a twelve-hour dial: on the hour ("Three o'clock"), up to
//! half past ("Twenty five past three", "Half past three"), and from there
//! counting down to the next hour ("Ten to four").

use super::time::TimeValue;

const HOURS_ON_DIAL: u32 = 12;
const HALF_HOUR: u32 = 30;
const MINUTES_IN_HOUR: u32 = 60;

/// How the minutes relate to the hour that is spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MinutePhase {
    /// Exactly on the hour.
    Zero,
    /// Minutes past the current hour, 1 to 30.
    Past(u32),
    /// Minutes remaining to the next hour, 1 to 29.
    To(u32),
}

impl MinutePhase {
    const fn of(minute: u32) -> Self {
        if minute == 0 {
            Self::Zero
        } else if minute > HALF_HOUR {
            Self::To(MINUTES_IN_HOUR - minute)
        } else {
            Self::Past(minute)
        }
    }

    /// Hours to add to the clock hour before naming it.
    const fn hour_offset(self) -> u32 {
        match self {
            Self::Zero | Self::Past(_) => 0,
            Self::To(_) => 1,
        }
    }
}

/// Build the phrase for a time, capitalizing its first word.
pub(crate) fn speak(time: TimeValue) -> String {
    let phase = MinutePhase::of(time.minute());
    let hour = dial_hour(time.hour() + phase.hour_offset());

    match phase {
        MinutePhase::Zero => format!("{} {}", capitalize(&number_words(hour)), number_words(0)),
        MinutePhase::Past(minutes) => {
            format!("{} past {}", capitalize(&minute_words(minutes)), number_words(hour))
        }
        MinutePhase::To(minutes) => {
            format!("{} to {}", capitalize(&minute_words(minutes)), number_words(hour))
        }
    }
}

/// Reduce a 24-hour (or next-hour) value to the 1..=12 dial.
const fn dial_hour(hour: u32) -> u32 {
    match hour % HOURS_ON_DIAL {
        0 => HOURS_ON_DIAL,
        h => h,
    }
}

/// Words for a minute count; thirty minutes is "half".
fn minute_words(minutes: u32) -> String {
    if minutes == HALF_HOUR {
        "half".to_string()
    } else {
        number_words(minutes)
    }
}

/// English words for a number below one hundred.
///
/// Zero is "o'clock", since it is only ever spoken after an hour.
fn number_words(n: u32) -> String {
    if let Some(word) = small_number(n) {
        return word.to_string();
    }

    match (tens(n / 10), small_number(n % 10)) {
        (Some(tens_word), Some(_)) if n % 10 == 0 => tens_word.to_string(),
        (Some(tens_word), Some(ones)) => format!("{tens_word} {ones}"),
        _ => n.to_string(),
    }
}

const fn small_number(n: u32) -> Option<&'static str> {
    Some(match n {
        0 => "o'clock",
        1 => "one",
        2 => "two",
        3 => "three",
        4 => "four",
        5 => "five",
        6 => "six",
        7 => "seven",
        8 => "eight",
        9 => "nine",
        10 => "ten",
        11 => "eleven",
        12 => "twelve",
        13 => "thirteen",
        14 => "fourteen",
        15 => "fifteen",
        16 => "sixteen",
        17 => "seventeen",
        18 => "eighteen",
        19 => "nineteen",
        20 => "twenty",
        _ => return None,
    })
}

const fn tens(digit: u32) -> Option<&'static str> {
    Some(match digit {
        2 => "twenty",
        3 => "thirty",
        4 => "forty",
        5 => "fifty",
        6 => "sixty",
        7 => "seventy",
        8 => "eighty",
        9 => "ninety",
        _ => return None,
    })
}

/// Upper-case the first ASCII letter of a phrase.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out = String::with_capacity(word.len());
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(hour: u32, minute: u32) -> String {
        speak(TimeValue::new(hour, minute).unwrap())
    }

    #[test]
    fn test_minute_phase() {
        assert_eq!(MinutePhase::of(0), MinutePhase::Zero);
        assert_eq!(MinutePhase::of(1), MinutePhase::Past(1));
        assert_eq!(MinutePhase::of(30), MinutePhase::Past(30));
        assert_eq!(MinutePhase::of(31), MinutePhase::To(29));
        assert_eq!(MinutePhase::of(59), MinutePhase::To(1));
    }

    #[test]
    fn test_on_the_hour() {
        assert_eq!(phrase(0, 0), "Twelve o'clock");
        assert_eq!(phrase(12, 0), "Twelve o'clock");
        assert_eq!(phrase(3, 0), "Three o'clock");
        assert_eq!(phrase(15, 0), "Three o'clock");
        assert_eq!(phrase(23, 0), "Eleven o'clock");
    }

    #[test]
    fn test_past() {
        assert_eq!(phrase(3, 30), "Half past three");
        assert_eq!(phrase(3, 1), "One past three");
        assert_eq!(phrase(9, 15), "Fifteen past nine");
        assert_eq!(phrase(0, 20), "Twenty past twelve");
        assert_eq!(phrase(14, 25), "Twenty five past two");
        assert_eq!(phrase(21, 29), "Twenty nine past nine");
    }

    #[test]
    fn test_to() {
        assert_eq!(phrase(11, 50), "Ten to twelve");
        assert_eq!(phrase(23, 59), "One to twelve");
        assert_eq!(phrase(4, 50), "Ten to five");
        assert_eq!(phrase(12, 31), "Twenty nine to one");
        assert_eq!(phrase(7, 45), "Fifteen to eight");
    }

    #[test]
    fn test_every_time_is_capitalized() {
        for hour in 0..=23 {
            for minute in 0..=59 {
                let text = phrase(hour, minute);
                let first = text.chars().next().unwrap();
                assert!(first.is_ascii_uppercase(), "{hour}:{minute} gave {text:?}");
                assert!(!text[1..].chars().any(|c| c.is_ascii_uppercase()));
                assert!(!text.chars().any(|c| c.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let time = TimeValue::new(18, 42).unwrap();
        assert_eq!(speak(time), speak(time));
    }

    #[test]
    fn test_number_words() {
        assert_eq!(number_words(0), "o'clock");
        assert_eq!(number_words(13), "thirteen");
        assert_eq!(number_words(20), "twenty");
        assert_eq!(number_words(21), "twenty one");
        assert_eq!(number_words(40), "forty");
        assert_eq!(minute_words(30), "half");
    }

    #[test]
    fn test_dial_hour() {
        assert_eq!(dial_hour(0), 12);
        assert_eq!(dial_hour(12), 12);
        assert_eq!(dial_hour(13), 1);
        assert_eq!(dial_hour(24), 12);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("half"), "Half");
        assert_eq!(capitalize(""), "");
    }
}
