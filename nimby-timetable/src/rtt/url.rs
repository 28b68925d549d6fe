//! Realtime Trains URL handling.

use chrono::NaiveDate;

use super::error::RttError;

/// Extract the service date from a Realtime Trains service URL.
///
/// Service URLs end `/<uid>/<YYYY-MM-DD>/detailed`, so the date is the
/// second-to-last path segment.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nimby_timetable::rtt::date_from_url;
///
/// let url = "https://www.realtimetrains.co.uk/service/gb-nr:W12345/2026-01-03/detailed";
/// assert_eq!(date_from_url(url).unwrap(), NaiveDate::from_ymd_opt(2026, 1, 3).unwrap());
/// ```
pub fn date_from_url(url: &str) -> Result<NaiveDate, RttError> {
    let token = url
        .rsplit('/')
        .nth(1)
        .ok_or_else(|| RttError::InvalidUrl(url.to_string()))?;

    NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| RttError::InvalidUrl(url.to_string()))
}
