//! Lead time codes used on working timetable rows.
//!
//! A row carries at most one of these characters next to its departure
//! digits. Each maps to a fixed lead time which is taken off the departure
//! to give the arrival.

use chrono::{Duration, NaiveDateTime};

/// Lead time code table, in seconds. Codes are case-sensitive.
const LEAD_TIMES: &[(char, i64)] = &[
    ('+', 15),
    ('a', 30),
    ('A', 45),
    ('b', 60),
    ('B', 75),
    ('c', 90),
    ('C', 105),
    ('d', 120),
    ('D', 135),
    ('e', 150),
    ('E', 165),
    ('f', 180),
    ('F', 195),
    ('g', 210),
    ('G', 225),
    ('h', 240),
    ('H', 255),
    ('j', 270),
    ('J', 285),
    ('k', 300),
];

/// Look up the lead time for a single code character.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use nimby_timetable::domain::lead_time;
///
/// assert_eq!(lead_time('+'), Some(Duration::seconds(15)));
/// assert_eq!(lead_time('B'), Some(Duration::seconds(75)));
/// assert_eq!(lead_time('i'), None);
/// ```
pub fn lead_time(code: char) -> Option<Duration> {
    LEAD_TIMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, secs)| Duration::seconds(*secs))
}

/// Derive an arrival from a departure and the row's non-digit characters.
///
/// The first recognised code wins; anything else is skipped. Returns `None`
/// when no character is a code.
pub fn arrival_before(codes: &[char], departure: NaiveDateTime) -> Option<NaiveDateTime> {
    codes
        .iter()
        .find_map(|&c| lead_time(c))
        .map(|lead| departure - lead)
}
