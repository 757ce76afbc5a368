//! Error types for venue fetching.

use thiserror::Error;

/// Errors that can occur when fetching venues from the places service.
#[derive(Debug, Error)]
pub enum VenueError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The service answered with a non-success status code.
    #[error("Places API returned status {status}")]
    ApiStatus { status: u16 },

    /// JSON deserialization failed.
    #[error("Failed to parse response: {0}")]
    JsonError(String),
}
