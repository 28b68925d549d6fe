//! Source document retrieval.
//!
//! Realtime Trains pages are fetched over HTTP. Saved pages can be read
//! from disk with a `file://` locator, which keeps the date-bearing path
//! layout of the service URL.

mod client;
mod error;

pub use client::{Downloader, FetchConfig, Locator};
pub use error::FetchError;
