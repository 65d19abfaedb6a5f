//! Url-keyed union-merge
//!
//! The one merge rule used everywhere in Pindrop: combine two ordered song
//! collections by url uniqueness, keeping the existing collection's order and
//! appending unseen songs at the end. Both the server store and the client
//! sync protocol apply it, which is what makes re-sent updates idempotent.

use crate::types::{PlaylistMap, SongRef};
use std::collections::HashSet;

/// Union `incoming` into `existing` in place
///
/// Songs whose url already appears in `existing` are dropped; the rest are
/// appended in their incoming order.
pub fn union_merge(existing: &mut Vec<SongRef>, incoming: &[SongRef]) {
    let mut seen: HashSet<String> = existing.iter().map(|s| s.url.clone()).collect();

    for song in incoming {
        if seen.insert(song.url.clone()) {
            existing.push(song.clone());
        }
    }
}

/// Union two collections into a new one, `base` order first
pub fn union_merged(base: &[SongRef], incoming: &[SongRef]) -> Vec<SongRef> {
    let mut merged = base.to_vec();
    union_merge(&mut merged, incoming);
    merged
}

/// Merge `incoming` playlists into `existing` in place
///
/// Playlists absent from `existing` are created; present ones get the same
/// url-keyed union as queues.
pub fn merge_playlists(existing: &mut PlaylistMap, incoming: &PlaylistMap) {
    for (name, songs) in incoming {
        let target = existing.entry(name.clone()).or_default();
        union_merge(target, songs);
    }
}
