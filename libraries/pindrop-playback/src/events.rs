//! Player events
//!
//! Event-based communication for UI synchronization. The manager pushes
//! events as it mutates; the UI layer drains them after each call and
//! re-renders whatever changed.

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The current-song state changed (play/pause/stop)
    StateChanged {
        /// The new state
        state: PlaybackState,
    },

    /// The current song changed
    TrackChanged {
        /// Url of the new current song
        url: String,
        /// Url of the previous song (if any)
        previous: Option<String>,
    },

    /// Queue contents changed (song enqueued)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// A playlist was created or extended
    PlaylistChanged {
        /// Playlist name
        name: String,
        /// New playlist length
        length: usize,
    },

    /// Natural playback completion reached the end of the queue
    QueueEnded,

    /// Non-fatal error (playback failure); state is not rolled back
    Error {
        /// Error message
        message: String,
    },
}
