//! Timetable time token decoding.
//!
//! Both sources encode times as bare digit groups rather than "HH:MM"
//! strings. Working timetable rows use four digits, optionally followed by
//! a digit pair giving a fraction of a minute ("0905" or "090512" for
//! 09:05:30). Realtime Trains pages use four digits with an optional `½`
//! glyph for the half minute.
//!
//! Neither encoding carries a date, so every decoder takes the reference
//! date plus the previous decoded time of the service and rolls the result
//! forward one day when it would otherwise go backwards.

use chrono::{Duration, NaiveDateTime};

/// Half-minute marker used by Realtime Trains.
pub const HALF_MARKER: char = '½';

/// Error returned when a time token cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time {token:?}: {reason}")]
pub struct TimeError {
    token: String,
    reason: &'static str,
}

impl TimeError {
    fn new(token: impl Into<String>, reason: &'static str) -> Self {
        Self {
            token: token.into(),
            reason,
        }
    }

    /// Returns the token that failed to decode.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Decode a 4 or 6 digit working timetable token.
///
/// The first two digits are the hour and the next two the minute. A fifth
/// and sixth digit are read as a numerator/denominator pair, giving
/// `floor(60 * n / d)` seconds.
///
/// The decoded time is `date` plus the parsed hour, minute and second,
/// moved on by one day if that is earlier than `last_time`.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Timelike};
/// use nimby_timetable::domain::decode_digits;
///
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
///
/// let digits: Vec<char> = "090512".chars().collect();
/// let time = decode_digits(&digits, date, date).unwrap();
/// assert_eq!((time.hour(), time.minute(), time.second()), (9, 5, 30));
///
/// // Earlier than the previous time, so it belongs to the next day
/// let digits: Vec<char> = "0010".chars().collect();
/// let after_midnight = decode_digits(&digits, date, time).unwrap();
/// assert_eq!(after_midnight.date(), NaiveDate::from_ymd_opt(2000, 1, 2).unwrap());
/// ```
pub fn decode_digits(
    digits: &[char],
    date: NaiveDateTime,
    last_time: NaiveDateTime,
) -> Result<NaiveDateTime, TimeError> {
    let token: String = digits.iter().collect();

    if digits.len() != 4 && digits.len() != 6 {
        return Err(TimeError::new(token, "expected 4 or 6 digits"));
    }

    let hour =
        parse_two_digits(&digits[0..2]).ok_or_else(|| TimeError::new(&token, "invalid hour"))?;
    let minute =
        parse_two_digits(&digits[2..4]).ok_or_else(|| TimeError::new(&token, "invalid minute"))?;

    let second = if digits.len() == 6 {
        let numerator = digit_value(digits[4])
            .ok_or_else(|| TimeError::new(&token, "invalid fraction numerator"))?;
        let denominator = digit_value(digits[5])
            .ok_or_else(|| TimeError::new(&token, "invalid fraction denominator"))?;
        if denominator == 0 {
            return Err(TimeError::new(token, "fraction denominator is zero"));
        }
        60 * numerator / denominator
    } else {
        0
    };

    let candidate =
        date + Duration::hours(hour) + Duration::minutes(minute) + Duration::seconds(second);

    Ok(roll_forward(candidate, last_time))
}

/// Decode a Realtime Trains time cell such as `"1023"` or `"1023½"`.
///
/// Returns `Ok(None)` for an empty cell, which is how the page shows a
/// missing arrival or the terminal's missing departure.
pub fn decode_half_marked(
    text: &str,
    date: NaiveDateTime,
    last_time: NaiveDateTime,
) -> Result<Option<NaiveDateTime>, TimeError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 4 {
        return Err(TimeError::new(text, "expected HHMM"));
    }

    let hour =
        parse_two_digits(&chars[0..2]).ok_or_else(|| TimeError::new(text, "invalid hour"))?;
    let minute =
        parse_two_digits(&chars[2..4]).ok_or_else(|| TimeError::new(text, "invalid minute"))?;
    let second = if text.contains(HALF_MARKER) { 30 } else { 0 };

    let candidate =
        date + Duration::hours(hour) + Duration::minutes(minute) + Duration::seconds(second);

    Ok(Some(roll_forward(candidate, last_time)))
}

/// Move `candidate` on by one day if it is earlier than `last_time`.
///
/// Only one step is ever taken: a service is assumed to cross midnight at
/// most once between consecutive rows.
pub fn roll_forward(candidate: NaiveDateTime, last_time: NaiveDateTime) -> NaiveDateTime {
    if candidate < last_time {
        candidate + Duration::days(1)
    } else {
        candidate
    }
}

/// Parse two decimal digit characters into a number.
fn parse_two_digits(chars: &[char]) -> Option<i64> {
    if chars.len() != 2 {
        return None;
    }
    Some(digit_value(chars[0])? * 10 + digit_value(chars[1])?)
}

fn digit_value(c: char) -> Option<i64> {
    c.to_digit(10).map(i64::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn decode_four_digits() {
        let base = midnight(2000, 1, 1);

        let t = decode_digits(&chars("0905"), base, base).unwrap();
        assert_eq!(t, at(9, 5, 0));

        let t = decode_digits(&chars("2359"), base, base).unwrap();
        assert_eq!(t, at(23, 59, 0));
    }

    #[test]
    fn decode_fractional_minute() {
        let base = midnight(2000, 1, 1);

        // 1/2 minute
        assert_eq!(decode_digits(&chars("090512"), base, base).unwrap(), at(9, 5, 30));
        // 1/4 minute
        assert_eq!(decode_digits(&chars("090514"), base, base).unwrap(), at(9, 5, 15));
        // 3/4 minute
        assert_eq!(decode_digits(&chars("090534"), base, base).unwrap(), at(9, 5, 45));
        // 1/3 minute
        assert_eq!(decode_digits(&chars("090513"), base, base).unwrap(), at(9, 5, 20));
    }

    #[test]
    fn decode_wrong_length() {
        let base = midnight(2000, 1, 1);

        assert!(decode_digits(&chars("090"), base, base).is_err());
        assert!(decode_digits(&chars("09051"), base, base).is_err());
        assert!(decode_digits(&chars("0905123"), base, base).is_err());
    }

    #[test]
    fn decode_non_decimal_numeric() {
        let base = midnight(2000, 1, 1);

        // '½' is numeric but not a decimal digit
        let err = decode_digits(&chars("09½5"), base, base).unwrap_err();
        assert_eq!(err.token(), "09½5");
        assert_eq!(err.to_string(), "invalid time \"09½5\": invalid minute");
    }

    #[test]
    fn decode_zero_denominator() {
        let base = midnight(2000, 1, 1);
        assert!(decode_digits(&chars("090510"), base, base).is_err());
    }

    #[test]
    fn decode_rolls_over_midnight() {
        let base = midnight(2000, 1, 1);
        let last = at(23, 50, 0);

        let t = decode_digits(&chars("0010"), base, last).unwrap();
        assert_eq!(t.date(), NaiveDate::from_ymd_opt(2000, 1, 2).unwrap());
        assert_eq!((t.hour(), t.minute()), (0, 10));
    }

    #[test]
    fn equal_time_does_not_roll() {
        let base = midnight(2000, 1, 1);
        let last = at(9, 5, 0);

        let t = decode_digits(&chars("0905"), base, last).unwrap();
        assert_eq!(t, last);
    }

    #[test]
    fn half_marked_whole_minute() {
        let base = midnight(2024, 1, 1);
        let t = decode_half_marked("1023", base, base).unwrap().unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (10, 23, 0));
    }

    #[test]
    fn half_marked_half_minute() {
        let base = midnight(2024, 1, 1);
        let t = decode_half_marked("1023½", base, base).unwrap().unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (10, 23, 30));
    }

    #[test]
    fn half_marked_empty_is_none() {
        let base = midnight(2024, 1, 1);
        assert_eq!(decode_half_marked("", base, base).unwrap(), None);
        assert_eq!(decode_half_marked("  \n", base, base).unwrap(), None);
    }

    #[test]
    fn half_marked_rolls_over() {
        let base = midnight(2024, 1, 1);
        let last = base + Duration::hours(23) + Duration::minutes(58);

        let t = decode_half_marked("0002½", base, last).unwrap().unwrap();
        assert_eq!(t, midnight(2024, 1, 2) + Duration::seconds(150));
    }

    #[test]
    fn half_marked_malformed() {
        let base = midnight(2024, 1, 1);
        assert!(decode_half_marked("10", base, base).is_err());
        assert!(decode_half_marked("ab23", base, base).is_err());
    }
}
