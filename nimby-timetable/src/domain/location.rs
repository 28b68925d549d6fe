//! Timed locations on a service.
//!
//! A `Location` is one row of a timetable: a stop or a pass point with
//! absolute times and the optional platform, path, line and allowance
//! annotations a Realtime Trains page shows.

use std::fmt;

use chrono::NaiveDateTime;

use crate::render::{allowance_brackets, format_clock};

/// A stop or pass point on a service.
///
/// # Time Semantics
///
/// - The origin has a departure and usually no arrival
/// - The terminal has an arrival and no departure
/// - A pass has a departure (the passing time) and no arrival
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Display name, possibly with a bracketed short code, e.g. `"Reading [RDG]"`
    pub name: String,
    /// Scheduled arrival time
    pub arrival_time: Option<NaiveDateTime>,
    /// Scheduled departure (or passing) time
    pub departure_time: Option<NaiveDateTime>,
    /// Platform
    pub platform: Option<String>,
    /// Whether the service runs through without stopping
    pub is_pass: bool,
    /// Path code
    pub path: Option<String>,
    /// Line code
    pub line: Option<String>,
    /// Pathing allowance
    pub path_allowance: Option<String>,
    /// Engineering allowance
    pub eng_allowance: Option<String>,
    /// Performance allowance
    pub perf_allowance: Option<String>,
}

impl Location {
    /// Creates a stop with the given name and no times or annotations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arrival_time: None,
            departure_time: None,
            platform: None,
            is_pass: false,
            path: None,
            line: None,
            path_allowance: None,
            eng_allowance: None,
            perf_allowance: None,
        }
    }

    /// Returns the short code used in origin/destination summaries.
    ///
    /// This is the text inside the first pair of square brackets in the
    /// name, or the whole name if it has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use nimby_timetable::domain::Location;
    ///
    /// assert_eq!(Location::new("London Paddington [PAD]").timetable_code(), "PAD");
    /// assert_eq!(Location::new("S01").timetable_code(), "S01");
    /// ```
    pub fn timetable_code(&self) -> &str {
        match self.name.split_once('[') {
            Some((_, rest)) => rest.split(']').next().unwrap_or(rest),
            None => &self.name,
        }
    }

    /// Whether any path, line or allowance annotation is set.
    ///
    /// Empty strings count as unset.
    pub fn is_annotated(&self) -> bool {
        [
            &self.path,
            &self.line,
            &self.path_allowance,
            &self.eng_allowance,
            &self.perf_allowance,
        ]
        .into_iter()
        .any(|field| field.as_deref().is_some_and(|s| !s.is_empty()))
    }

    /// Turn this location into a terminal: its departure becomes its arrival.
    pub(crate) fn terminate(&mut self) {
        self.arrival_time = self.departure_time.take();
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:30} {:6} {:6}{}",
            self.name,
            format_clock(self.arrival_time, false),
            format_clock(self.departure_time, self.is_pass),
            allowance_brackets(
                self.eng_allowance.as_deref(),
                self.path_allowance.as_deref(),
                self.perf_allowance.as_deref(),
            )
        )
    }
}
