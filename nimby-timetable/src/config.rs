//! Conversion configuration.

use chrono::{NaiveDate, NaiveDateTime};

use crate::timetable::DEFAULT_LEAD_IN_MINUTES;

/// Configuration for the NIMBY Rails export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Minutes between the timetable start and the first departure.
    pub lead_in_minutes: i64,
}

impl ExportConfig {
    /// Create a new configuration with the given lead-in.
    pub fn new(lead_in_minutes: i64) -> Self {
        Self { lead_in_minutes }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            lead_in_minutes: DEFAULT_LEAD_IN_MINUTES,
        }
    }
}

/// Configuration for working timetable parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LulConfig {
    /// Date the first row's time is anchored to.
    ///
    /// Working timetable input carries no date; only offsets between rows
    /// reach the export, so any fixed date will do.
    pub reference_date: NaiveDateTime,
}

impl LulConfig {
    /// Create a new configuration anchored at `reference_date`.
    pub fn new(reference_date: NaiveDateTime) -> Self {
        Self { reference_date }
    }
}

impl Default for LulConfig {
    fn default() -> Self {
        Self {
            reference_date: NaiveDate::from_ymd_opt(2000, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap_or_default(),
        }
    }
}
