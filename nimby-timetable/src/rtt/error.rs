//! Realtime Trains parse error types.

use crate::domain::TimeError;

/// Errors from Realtime Trains page parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RttError {
    /// The page title is missing or has no identifier after `|`
    #[error("could not find service identifier in page title")]
    MissingTitle,

    /// The page has no location list
    #[error("could not find locationlist div")]
    MissingLocationList,

    /// The location list has no locations
    #[error("location list is empty")]
    NoLocations,

    /// A stop is missing a required element
    #[error("could not find {element} at {stop}")]
    MissingElement { element: &'static str, stop: String },

    /// A stop has no departure cell
    #[error("could not find departure time at {0}")]
    MissingDeparture(String),

    /// A time cell could not be decoded
    #[error("bad time at {stop}: {source}")]
    Time {
        stop: String,
        #[source]
        source: TimeError,
    },

    /// The URL does not contain a service date
    #[error("no service date in URL: {0}")]
    InvalidUrl(String),
}
