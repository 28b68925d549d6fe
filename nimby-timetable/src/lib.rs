//! Timetable conversion for NIMBY Rails.
//!
//! Reads service timetables from Realtime Trains detailed pages or pasted
//! London Underground working timetable rows, and writes them out as
//! NIMBY Rails timetable entries relative to the first departure.

pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod input;
pub mod lul;
pub mod render;
pub mod rtt;
pub mod timetable;

pub use error::Error;
