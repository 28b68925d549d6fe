//! Top-level error type.

use crate::fetch::FetchError;
use crate::lul::LulError;
use crate::rtt::RttError;

/// Any failure while converting one source document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be retrieved
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The Realtime Trains page could not be parsed
    #[error(transparent)]
    Rtt(#[from] RttError),

    /// The working timetable rows could not be parsed
    #[error(transparent)]
    Lul(#[from] LulError),

    /// Reading input failed
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_transparently() {
        let err: Error = RttError::MissingLocationList.into();
        assert_eq!(err.to_string(), "could not find locationlist div");

        let err: Error = LulError::NoTimings.into();
        assert_eq!(err.to_string(), "no timing rows found");
    }
}
