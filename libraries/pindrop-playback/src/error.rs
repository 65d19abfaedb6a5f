//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// An operation needed a current song and none is loaded
    #[error("No song playing")]
    NoCurrentSong,

    /// The audio sink rejected an operation (autoplay policy, bad url, ...)
    #[error("Audio sink error: {0}")]
    Sink(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
