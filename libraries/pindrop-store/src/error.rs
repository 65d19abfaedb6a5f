/// Storage error types
use thiserror::Error;

/// Result type alias using `StoreError`
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors from the user record store and pin catalog
#[derive(Debug, Error)]
pub enum StoreError {
    /// Username already taken at registration
    #[error("Username already exists: {0}")]
    DuplicateUser(String),

    /// No record for that username
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Password mismatch on login
    #[error("Incorrect password")]
    BadCredentials,

    /// Pin catalog missing or malformed (fatal at startup)
    #[error("Pin catalog error: {0}")]
    Catalog(String),

    /// I/O error reading or rewriting a document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document does not parse/serialize
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
