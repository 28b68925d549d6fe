//! Parsed timetables and their NIMBY Rails export projection.

mod nimby;

use std::fmt;

use chrono::Duration;
use tracing::trace;

use crate::domain::{Location, Td};
use crate::render::format_clock;

pub use nimby::{NimbyLocation, NimbyTimetable};

/// Default lead-in before the first departure in an export, in minutes.
pub const DEFAULT_LEAD_IN_MINUTES: i64 = 1;

/// An ordered, non-empty list of locations for one service.
///
/// Times are absolute and already corrected for midnight rollover, so
/// departures never go backwards along the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    locations: Vec<Location>,
    td: Td,
}

impl Timetable {
    /// Create a timetable. Returns `None` if there are no locations.
    pub fn new(locations: Vec<Location>, td: Td) -> Option<Self> {
        if locations.is_empty() {
            return None;
        }
        Some(Self { locations, td })
    }

    /// Returns the locations in running order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Returns the timetable identifier.
    pub fn td(&self) -> &Td {
        &self.td
    }

    /// Returns the origin.
    pub fn first(&self) -> &Location {
        &self.locations[0]
    }

    /// Returns the terminal.
    pub fn last(&self) -> &Location {
        &self.locations[self.locations.len() - 1]
    }

    /// One-line summary: identifier, origin departure and end-point codes.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use nimby_timetable::domain::{Location, Td};
    /// use nimby_timetable::timetable::Timetable;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let mut origin = Location::new("London Paddington [PAD]");
    /// origin.departure_time = date.and_hms_opt(9, 5, 0);
    /// let mut terminal = Location::new("Bristol Temple Meads [BRI]");
    /// terminal.arrival_time = date.and_hms_opt(10, 50, 0);
    ///
    /// let timetable = Timetable::new(vec![origin, terminal], Td::new("1A23")).unwrap();
    /// assert_eq!(timetable.summary(), "1A23 09:05 PAD - BRI");
    /// ```
    pub fn summary(&self) -> String {
        format!(
            "{} {} {} - {}",
            self.td,
            format_clock(self.first().departure_time, false),
            self.first().timetable_code(),
            self.last().timetable_code()
        )
    }

    /// Project onto offsets from the first departure, for export.
    ///
    /// The origin is placed at `lead_in_minutes`. Every later location is
    /// offset by its departure minus the origin's departure, plus the same
    /// lead-in. Passes with no path, line or allowance annotation carry no
    /// information for the export and are dropped.
    ///
    /// A location without a departure (the terminal) gets no offset.
    pub fn to_nimby_timetable(&self, lead_in_minutes: i64) -> NimbyTimetable {
        let lead_in = Duration::minutes(lead_in_minutes);
        let first = self.first();

        let mut locations = Vec::with_capacity(self.locations.len());
        locations.push(NimbyLocation::from_location(Some(lead_in), first));

        for location in &self.locations[1..] {
            if location.is_pass && !location.is_annotated() {
                trace!(name = %location.name, "dropping unannotated pass");
                continue;
            }

            let offset = location
                .departure_time
                .zip(first.departure_time)
                .map(|(departure, origin)| departure - origin + lead_in);

            locations.push(NimbyLocation::from_location(offset, location));
        }

        NimbyTimetable::new(locations)
    }
}

impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, location) in self.locations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{location}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn stop(name: &str, arrival: Option<NaiveDateTime>, departure: Option<NaiveDateTime>) -> Location {
        let mut loc = Location::new(name);
        loc.arrival_time = arrival;
        loc.departure_time = departure;
        loc
    }

    fn pass(name: &str, departure: NaiveDateTime) -> Location {
        let mut loc = stop(name, None, Some(departure));
        loc.is_pass = true;
        loc
    }

    fn sample() -> Timetable {
        let mut annotated = pass("Southall [STL]", at(9, 15, 30));
        annotated.line = Some("RL".into());

        Timetable::new(
            vec![
                stop("London Paddington [PAD]", None, Some(at(9, 5, 0))),
                pass("Acton Main Line [AML]", at(9, 10, 0)),
                annotated,
                stop("Slough [SLO]", Some(at(9, 20, 0)), Some(at(9, 21, 30))),
                stop("Reading [RDG]", Some(at(9, 40, 0)), None),
            ],
            Td::new("1A23"),
        )
        .unwrap()
    }

    #[test]
    fn empty_timetable_rejected() {
        assert!(Timetable::new(vec![], Td::lul()).is_none());
    }

    #[test]
    fn accessors() {
        let tt = sample();
        assert_eq!(tt.locations().len(), 5);
        assert_eq!(tt.td().as_str(), "1A23");
        assert_eq!(tt.first().timetable_code(), "PAD");
        assert_eq!(tt.last().timetable_code(), "RDG");
    }

    #[test]
    fn summary_line() {
        assert_eq!(sample().summary(), "1A23 09:05 PAD - RDG");
    }

    #[test]
    fn display_one_line_per_location() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("London Paddington [PAD]"));
        assert!(lines[1].contains("09/10"));
    }

    #[test]
    fn nimby_drops_unannotated_pass() {
        let nimby = sample().to_nimby_timetable(DEFAULT_LEAD_IN_MINUTES);
        let names: Vec<&str> = nimby.locations().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "London Paddington [PAD]",
                "Southall [STL]",
                "Slough [SLO]",
                "Reading [RDG]"
            ]
        );
    }

    #[test]
    fn nimby_offsets() {
        let nimby = sample().to_nimby_timetable(1);
        let offsets: Vec<Option<Duration>> = nimby.locations().iter().map(|l| l.offset).collect();
        assert_eq!(
            offsets,
            vec![
                Some(Duration::minutes(1)),
                Some(Duration::minutes(11) + Duration::seconds(30)),
                Some(Duration::minutes(17) + Duration::seconds(30)),
                // Terminal has no departure
                None,
            ]
        );
    }

    #[test]
    fn nimby_custom_lead_in() {
        let nimby = sample().to_nimby_timetable(5);
        assert_eq!(nimby.locations()[0].offset, Some(Duration::minutes(5)));
        assert_eq!(
            nimby.locations()[2].offset,
            Some(Duration::minutes(21) + Duration::seconds(30))
        );
    }

    #[test]
    fn nimby_keeps_first_even_if_pass() {
        let origin = pass("Start", at(9, 0, 0));
        let tt = Timetable::new(
            vec![origin, stop("End", Some(at(9, 30, 0)), None)],
            Td::lul(),
        )
        .unwrap();

        let nimby = tt.to_nimby_timetable(1);
        assert_eq!(nimby.locations().len(), 2);
        assert_eq!(nimby.locations()[0].name, "Start");
    }

    #[test]
    fn nimby_offset_spans_midnight() {
        let next_day = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(0, 15, 0)
            .unwrap();
        let tt = Timetable::new(
            vec![
                stop("Origin", None, Some(at(23, 50, 0))),
                stop("Middle", Some(next_day), Some(next_day)),
                stop("End", Some(next_day), None),
            ],
            Td::lul(),
        )
        .unwrap();

        let nimby = tt.to_nimby_timetable(1);
        assert_eq!(nimby.locations()[1].offset, Some(Duration::minutes(26)));
    }
}
