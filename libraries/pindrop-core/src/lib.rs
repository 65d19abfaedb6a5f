//! Pindrop core domain types
//!
//! Shared types for the Pindrop map-based music sharing system:
//! - Song references (identity is the audio url)
//! - Geo-tagged pins
//! - Durable per-user records (queue, queue index, playlists)
//! - The url-keyed union-merge used by both the server store and the
//!   client sync protocol

pub mod merge;
pub mod types;

pub use merge::{merge_playlists, union_merge, union_merged};
pub use types::{Pin, PlaylistMap, SongRef, UserRecord, UserUpdate};
