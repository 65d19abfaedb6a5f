//! Error types for the Pindrop client.

use thiserror::Error;

/// Errors that can occur when interacting with a Pindrop server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Server answered 200 but refused the operation
    /// (duplicate username, wrong password, ...)
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
