//! Domain types for timetable conversion.
//!
//! This module contains the time token decoders shared by both source
//! parsers and the location model they produce.

mod allowance;
mod location;
mod td;
mod time;

pub use allowance::{arrival_before, lead_time};
pub use location::Location;
pub use td::Td;
pub use time::{HALF_MARKER, TimeError, decode_digits, decode_half_marked, roll_forward};
