//! Working timetable row parser.
//!
//! Input is the text of a London Underground working timetable column,
//! pasted one row per line. Each timing row holds four digits (HHMM), or
//! six with a trailing numerator/denominator pair for part-minutes, plus an
//! optional lead time code such as `+` or `b`. Rows with fewer than two
//! digits are platform numbers or headings and are skipped. A time
//! occasionally wraps onto the following line, so a row with the wrong
//! number of digits borrows the digits of the next one.

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::config::LulConfig;
use crate::domain::{Location, Td, TimeError, arrival_before, decode_digits};
use crate::timetable::Timetable;

/// Errors from working timetable parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LulError {
    /// A row's digits did not form a valid time
    #[error("row {row}: {source}")]
    Time {
        /// 1-based position of the row in the input
        row: usize,
        #[source]
        source: TimeError,
    },

    /// No row contained a time
    #[error("no timing rows found")]
    NoTimings,
}

/// Digits and code characters collected from one row.
#[derive(Debug, Default)]
struct Row {
    digits: Vec<char>,
    codes: Vec<char>,
}

impl Row {
    fn split(line: &str) -> Self {
        let mut row = Row::default();
        for c in line.chars() {
            if c.is_numeric() {
                row.digits.push(c);
            } else if !c.is_whitespace() {
                row.codes.push(c);
            }
        }
        row
    }

    fn has_time_length(&self) -> bool {
        self.digits.len() == 4 || self.digits.len() == 6
    }
}

/// Parse working timetable rows using the default reference date.
///
/// Locations are named `S01`, `S02`, ... in order. The last location is
/// the terminal: its departure becomes its arrival.
///
/// # Examples
///
/// ```
/// use nimby_timetable::lul::parse_lines;
///
/// let timetable = parse_lines(["0905", "2", "0908b", "0912"]).unwrap();
/// assert_eq!(timetable.td().as_str(), "LUL");
/// assert_eq!(timetable.locations().len(), 3);
/// assert_eq!(timetable.summary(), "LUL 09:05 S01 - S03");
/// ```
pub fn parse_lines<I, S>(lines: I) -> Result<Timetable, LulError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_lines_with(lines, &LulConfig::default())
}

/// Parse working timetable rows against the configured reference date.
pub fn parse_lines_with<I, S>(lines: I, config: &LulConfig) -> Result<Timetable, LulError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let date = config.reference_date;
    let mut last_time: NaiveDateTime = date;
    let mut locations: Vec<Location> = Vec::new();

    let mut lines = lines.into_iter().zip(1usize..);
    while let Some((line, row_number)) = lines.next() {
        let mut row = Row::split(line.as_ref());

        if row.digits.len() < 2 {
            trace!(row = row_number, "skipping non-timing row");
            continue;
        }

        if !row.has_time_length() {
            if let Some((continuation, _)) = lines.next() {
                row.digits.extend(
                    continuation
                        .as_ref()
                        .chars()
                        .filter(|c| c.is_numeric()),
                );
            }
        }

        if !row.has_time_length() {
            debug!(row = row_number, digits = row.digits.len(), "skipping malformed row");
            continue;
        }

        let departure = decode_digits(&row.digits, date, last_time).map_err(|source| {
            LulError::Time {
                row: row_number,
                source,
            }
        })?;
        let arrival = arrival_before(&row.codes, departure);
        last_time = departure;

        let mut location = Location::new(format!("S{:02}", locations.len() + 1));
        location.arrival_time = arrival;
        location.departure_time = Some(departure);
        locations.push(location);
    }

    if let Some(terminal) = locations.last_mut() {
        terminal.terminate();
    }

    debug!(locations = locations.len(), "parsed working timetable");

    Timetable::new(locations, Td::lul()).ok_or(LulError::NoTimings)
}
