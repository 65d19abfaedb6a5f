//! Pindrop - Playback Management
//!
//! Platform-agnostic playback, queue and playlist state machine for Pindrop.
//!
//! This crate provides:
//! - The current-song state machine (Empty -> Loaded -> Playing <-> Paused)
//! - A play queue with index-based navigation (duplicates allowed locally)
//! - Named playlists with url-keyed dedup on insert
//! - A drainable event stream for UI synchronization
//!
//! # Architecture
//!
//! `pindrop-playback` is completely platform-agnostic: the audio subsystem
//! (an HTML audio element, a native output, nothing at all) is reached
//! through the [`AudioSink`] trait, and persistence is someone else's job:
//! the sync layer in `pindrop-client` reads the manager's state after each
//! mutation and ships it to the server.
//!
//! # Example
//!
//! ```rust
//! use pindrop_core::SongRef;
//! use pindrop_playback::{NullSink, PlayerManager, PlaybackState};
//!
//! let mut player = PlayerManager::new(Box::new(NullSink::default()));
//!
//! let song = SongRef::new("https://example.com/a.mp3", "Song A", "Artist");
//! player.enqueue(song.clone());
//! player.select_and_play(song);
//!
//! assert_eq!(player.state(), PlaybackState::Playing);
//! ```

mod error;
mod events;
mod manager;
mod playlists;
mod queue;
mod sink;
pub mod types;

// Public exports
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use manager::PlayerManager;
pub use playlists::{AddOutcome, PlaylistSet};
pub use queue::PlayQueue;
pub use sink::{AudioSink, NullSink};
pub use types::{Direction, NowPlaying, PlaybackState};
