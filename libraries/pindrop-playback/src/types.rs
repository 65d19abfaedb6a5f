//! Core types for playback management

use pindrop_core::SongRef;
use serde::{Deserialize, Serialize};

/// State of the current-song cell
///
/// `Loaded` covers the window between assigning an audio source and playback
/// being requested (e.g. a song restored from a saved queue on reload).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No current song
    Empty,

    /// Source assigned, playback not requested
    Loaded,

    /// Currently playing (optimistic, see `PlayerManager::select_and_play`)
    Playing,

    /// Paused mid-song
    Paused,
}

/// Queue navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Step back one entry
    Previous,

    /// Step forward one entry
    Next,
}

/// Transient snapshot of what is (nominally) playing
///
/// Derived from the state machine plus the audio sink; never persisted
/// directly. On reload it is reconstructed from the saved queue and index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NowPlaying {
    /// Current song, if any
    pub song: Option<SongRef>,

    /// Whether the machine considers itself playing
    pub is_playing: bool,

    /// Playback position in seconds, as reported by the sink
    pub position_secs: f64,

    /// Track duration in seconds, as reported by the sink
    pub duration_secs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_are_serializable() {
        let json = serde_json::to_string(&PlaybackState::Playing).unwrap();
        let back: PlaybackState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlaybackState::Playing);
    }
}
