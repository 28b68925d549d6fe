//! Fixed-column text rendering for timetable listings.
//!
//! NIMBY Rails timetable entries are laid out as
//! `name(40) platform(3) time(10) path(3) line(3) allowances`, with passes
//! written using `/` separators and shifted right by one column.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::domain::HALF_MARKER;

/// Render an offset from the start of the timetable.
///
/// Stops render as `HH:MM:SS` and passes as ` HH/MM/SS`. Hours are not
/// wrapped, so a service running past 24 hours keeps counting. `None`
/// renders blank.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use nimby_timetable::render::format_offset;
///
/// assert_eq!(format_offset(Some(Duration::seconds(65)), false), "00:01:05");
/// assert_eq!(format_offset(Some(Duration::seconds(65)), true), " 00/01/05");
/// assert_eq!(format_offset(None, true), "");
/// ```
pub fn format_offset(offset: Option<Duration>, is_pass: bool) -> String {
    let Some(offset) = offset else {
        return String::new();
    };

    let total = offset.num_seconds();
    let hours = total.div_euclid(3600);
    let minutes = total.div_euclid(60).rem_euclid(60);
    let seconds = total.rem_euclid(60);

    let lead = if is_pass { " " } else { "" };
    let sep = separator(is_pass);

    format!("{lead}{hours:02}{sep}{minutes:02}{sep}{seconds:02}")
}

/// Render an absolute time as `HH:MM` (or `HH/MM` for a pass).
///
/// A time on the half minute gets a trailing `½`. `None` renders blank.
pub fn format_clock(time: Option<NaiveDateTime>, is_pass: bool) -> String {
    let Some(time) = time else {
        return String::new();
    };

    let sep = separator(is_pass);
    let mut s = format!("{:02}{sep}{:02}", time.hour(), time.minute());
    if time.second() == 30 {
        s.push(HALF_MARKER);
    }
    s
}

/// Render allowance codes as ` [eng] (path) <perf>`, skipping unset ones.
pub fn allowance_brackets(eng: Option<&str>, path: Option<&str>, perf: Option<&str>) -> String {
    let mut s = String::new();

    if let Some(eng) = eng.filter(|a| !a.is_empty()) {
        s.push_str(&format!(" [{eng}]"));
    }
    if let Some(path) = path.filter(|a| !a.is_empty()) {
        s.push_str(&format!(" ({path})"));
    }
    if let Some(perf) = perf.filter(|a| !a.is_empty()) {
        s.push_str(&format!(" <{perf}>"));
    }

    s
}

fn separator(is_pass: bool) -> char {
    if is_pass { '/' } else { ':' }
}
