//! Error types for daybox operations.

use thiserror::Error;

use crate::api::ErrorStatus;

/// Errors that can occur in daybox operations.
#[derive(Error, Debug)]
pub enum DayboxError {
    /// Authenticated submit attempted without a bearer credential.
    #[error("No access token available")]
    MissingCredential,

    /// The service answered with a non-success status and an error payload.
    #[error("Server rejected the request: {message}")]
    Rejected {
        message: String,
        status: Option<ErrorStatus>,
    },

    /// The request never produced a usable response (connection, body or
    /// decode failure).
    #[error("{0}")]
    Transport(String),

    /// Device-local storage failed while reading or writing an aggregate.
    #[error("Local storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for daybox operations.
pub type DayboxResult<T> = Result<T, DayboxError>;
