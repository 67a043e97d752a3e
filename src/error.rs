//! Error types for underdoc.
//!
//! This module defines the error types returned by the fetch, parse,
//! extraction and output stages.

use std::path::PathBuf;

/// Error type for the documentation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network or transport failure while fetching the documentation page.
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("server returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The documentation URL could not be parsed or uses an unsupported scheme.
    #[error("invalid documentation URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The input could not be loaded into a DOM tree at all.
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    /// A single candidate passed the top-level filter but its fields could
    /// not be derived. The entry is dropped; extraction continues.
    #[error("entry extraction failed: {0}")]
    Entry(String),

    /// JSON serialization of the extracted entries failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the serialized output failed.
    #[error("failed to write {path}: {source}")]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
