//! NIMBY Rails export projection.

use std::fmt;

use chrono::Duration;

use crate::domain::Location;
use crate::render::{allowance_brackets, format_offset};

/// A location with its time expressed as an offset from the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NimbyLocation {
    pub name: String,
    /// Offset of the departure from the timetable start, if known
    pub offset: Option<Duration>,
    pub platform: Option<String>,
    pub is_pass: bool,
    pub path: Option<String>,
    pub line: Option<String>,
    pub path_allowance: Option<String>,
    pub eng_allowance: Option<String>,
    pub perf_allowance: Option<String>,
}

impl NimbyLocation {
    /// Copy a location's annotations, replacing its times with `offset`.
    pub fn from_location(offset: Option<Duration>, location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            offset,
            platform: location.platform.clone(),
            is_pass: location.is_pass,
            path: location.path.clone(),
            line: location.line.clone(),
            path_allowance: location.path_allowance.clone(),
            eng_allowance: location.eng_allowance.clone(),
            perf_allowance: location.perf_allowance.clone(),
        }
    }
}

impl fmt::Display for NimbyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Passes sit one column to the right
        let name = if self.is_pass {
            format!(" {:39}", self.name)
        } else {
            format!("{:40}", self.name)
        };

        write!(
            f,
            "{:40} {:3} {:10} {:3} {:3} {}",
            name,
            self.platform.as_deref().unwrap_or(""),
            format_offset(self.offset, self.is_pass),
            self.path.as_deref().unwrap_or(""),
            self.line.as_deref().unwrap_or(""),
            allowance_brackets(
                self.eng_allowance.as_deref(),
                self.path_allowance.as_deref(),
                self.perf_allowance.as_deref(),
            )
        )
    }
}

/// An export-ready timetable, one row per kept location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NimbyTimetable {
    locations: Vec<NimbyLocation>,
}

impl NimbyTimetable {
    pub(crate) fn new(locations: Vec<NimbyLocation>) -> Self {
        Self { locations }
    }

    /// Returns the rows in running order.
    pub fn locations(&self) -> &[NimbyLocation] {
        &self.locations
    }
}

impl fmt::Display for NimbyTimetable {
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

    fn row(name: &str, offset: Option<Duration>, is_pass: bool) -> NimbyLocation {
        let mut loc = Location::new(name);
        loc.is_pass = is_pass;
        loc.platform = Some("1".into());
        loc.path = Some("ML".into());
        loc.line = Some("FL".into());
        NimbyLocation::from_location(offset, &loc)
    }

    #[test]
    fn stop_row_layout() {
        let r = row("Slough [SLO]", Some(Duration::seconds(1050)), false);
        assert_eq!(
            r.to_string(),
            format!("{:40} {:3} {:10} {:3} {:3} ", "Slough [SLO]", "1", "00:17:30", "ML", "FL")
        );
    }

    #[test]
    fn pass_row_is_shifted() {
        let r = row("Southall [STL]", Some(Duration::seconds(65)), true);
        let text = r.to_string();

        assert!(text.starts_with(" Southall [STL]"));
        assert_eq!(&text[41..44], "1  ");
        assert_eq!(&text[45..55], " 00/01/05 ");
    }

    #[test]
    fn unknown_offset_is_blank() {
        let r = row("Reading [RDG]", None, false);
        assert_eq!(&r.to_string()[41..56], format!("{:15}", "1"));
    }

    #[test]
    fn allowances_trail_the_row() {
        let mut loc = Location::new("Maidenhead [MAI]");
        loc.path_allowance = Some("1".into());
        loc.eng_allowance = Some("2".into());
        loc.perf_allowance = Some("½".into());

        let text = NimbyLocation::from_location(Some(Duration::minutes(1)), &loc).to_string();
        assert!(text.ends_with("  [2] (1) <½>"));
    }

    #[test]
    fn missing_annotations_render_as_padding() {
        let loc = Location::new("S01");
        let text = NimbyLocation::from_location(Some(Duration::minutes(1)), &loc).to_string();
        assert_eq!(text, format!("{:40} {:3} {:10} {:3} {:3} ", "S01", "", "00:01:00", "", ""));
    }

    #[test]
    fn timetable_rows_joined_by_newline() {
        let tt = NimbyTimetable::new(vec![
            row("A", Some(Duration::minutes(1)), false),
            row("B", None, false),
        ]);
        assert_eq!(tt.to_string().lines().count(), 2);
        assert_eq!(tt.locations().len(), 2);
    }
}
