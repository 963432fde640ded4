//! Error types for the todo API client

use thiserror::Error;

/// Errors that can occur when talking to the todo backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the `detail` body field when present, otherwise
        /// a status-derived fallback
        message: String,
    },

    /// Response body could not be parsed
    #[error("Response parsing failed: {0}")]
    Parse(String),
}
