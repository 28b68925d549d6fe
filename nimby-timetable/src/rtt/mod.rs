//! Realtime Trains service page parser.
//!
//! Parses the "detailed" view of a Realtime Trains service page, which
//! lists every working timetable location with booked times, platforms,
//! path and line codes and allowances. The page does not state its date
//! in a convenient form, so the date is taken from the page URL.

mod error;
mod parser;
mod url;

pub use error::RttError;
pub use parser::parse_page;
pub use url::date_from_url;
