//! Retrieval error types.

use std::path::PathBuf;

/// Errors that can occur while retrieving a source document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// Local file could not be read
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
