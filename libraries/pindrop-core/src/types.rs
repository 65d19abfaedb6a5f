/// Pindrop domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named playlists, each an ordered list of songs
///
/// Keys are arbitrary user-supplied names. `BTreeMap` keeps the serialized
/// document stable across rewrites.
pub type PlaylistMap = BTreeMap<String, Vec<SongRef>>;

/// Reference to a playable song
///
/// Immutable once created; identity is the `url`. Two references with the
/// same url are the same song for every merge and dedup rule in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRef {
    /// Audio url (unique key)
    pub url: String,

    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,
}

impl SongRef {
    /// Create a new song reference
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// A geo-located record associating a map coordinate with one song
///
/// Pins are read-only from the client's perspective; the catalog is loaded
/// once per server process and never mutated by client actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Unique pin identifier
    pub id: u64,

    /// Artist name
    pub artist: String,

    /// Song title
    pub song: String,

    /// Human-readable location label
    pub location: String,

    /// Latitude
    pub lat: f64,

    /// Longitude
    pub lng: f64,

    /// Audio url the client plays directly
    pub audio_url: String,
}

impl From<&Pin> for SongRef {
    fn from(pin: &Pin) -> Self {
        SongRef {
            url: pin.audio_url.clone(),
            title: pin.song.clone(),
            artist: pin.artist.clone(),
        }
    }
}

/// Durable per-user state record
///
/// The server store is the source of truth; clients hold a working copy and
/// reconcile through merge updates. `queue_index` is `-1` when nothing is
/// selected, otherwise an index into `queue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Login password (plaintext compare, see DESIGN.md)
    pub password: String,

    /// Saved play queue
    #[serde(default)]
    pub queue: Vec<SongRef>,

    /// Saved queue position; `-1` means nothing selected
    #[serde(rename = "queueIndex", default = "default_queue_index")]
    pub queue_index: i64,

    /// Named playlists
    #[serde(default)]
    pub playlists: PlaylistMap,

    /// Registration timestamp
    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_queue_index() -> i64 {
    -1
}

impl UserRecord {
    /// Create a fresh record at registration time
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            queue: Vec::new(),
            queue_index: default_queue_index(),
            playlists: PlaylistMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Apply a partial update with the canonical merge policy
    ///
    /// - `queue`: url-keyed union, existing order preserved, new songs
    ///   appended at the end
    /// - `playlists`: per-name create-if-absent, then the same url-keyed
    ///   union into each
    /// - `queue_index`: unconditional overwrite (last write wins)
    pub fn apply_update(&mut self, update: &UserUpdate) {
        if let Some(queue) = &update.queue {
            crate::merge::union_merge(&mut self.queue, queue);
        }

        if let Some(playlists) = &update.playlists {
            crate::merge::merge_playlists(&mut self.playlists, playlists);
        }

        if let Some(index) = update.queue_index {
            self.queue_index = index;
        }
    }
}

/// Partial update sent by a client against a stored [`UserRecord`]
///
/// Absent fields are left untouched by the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    /// Songs to union into the stored queue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<Vec<SongRef>>,

    /// Playlists to union into the stored playlists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlists: Option<PlaylistMap>,

    /// New queue position (overwrite, not merge)
    #[serde(
        rename = "queueIndex",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub queue_index: Option<i64>,
}

impl UserUpdate {
    /// Update carrying only a queue
    pub fn queue(songs: Vec<SongRef>) -> Self {
        Self {
            queue: Some(songs),
            ..Self::default()
        }
    }

    /// Update carrying only playlists
    pub fn playlists(playlists: PlaylistMap) -> Self {
        Self {
            playlists: Some(playlists),
            ..Self::default()
        }
    }

    /// Update carrying only a queue index
    pub fn queue_index(index: i64) -> Self {
        Self {
            queue_index: Some(index),
            ..Self::default()
        }
    }

    /// True if no field is present
    pub fn is_empty(&self) -> bool {
        self.queue.is_none() && self.playlists.is_none() && self.queue_index.is_none()
    }
}
