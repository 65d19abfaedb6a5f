//! Named playlists
//!
//! User-curated song collections, independent of the queue. Inserts dedup by
//! url, matching the server's merge rule so the local copy and the stored
//! copy converge after a sync round.

use pindrop_core::{merge, PlaylistMap, SongRef};

/// Outcome of adding a song to a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Song appended
    Added,

    /// Song's url already present; nothing changed
    Duplicate,

    /// No playlist with that name
    UnknownPlaylist,
}

/// The user's playlist collection
#[derive(Debug, Clone, Default)]
pub struct PlaylistSet {
    inner: PlaylistMap,
}

impl PlaylistSet {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a stored record
    pub fn from_saved(playlists: PlaylistMap) -> Self {
        Self { inner: playlists }
    }

    /// Create a playlist seeded with one song
    ///
    /// Reusing an existing name union-merges the seed into it rather than
    /// overwriting, so client and stored state agree after the next sync.
    /// Returns the playlist's resulting length.
    pub fn create(&mut self, name: impl Into<String>, seed: SongRef) -> usize {
        let songs = self.inner.entry(name.into()).or_default();
        merge::union_merge(songs, &[seed]);
        songs.len()
    }

    /// Append a song to an existing playlist, deduping by url
    pub fn add(&mut self, name: &str, song: &SongRef) -> AddOutcome {
        let Some(songs) = self.inner.get_mut(name) else {
            return AddOutcome::UnknownPlaylist;
        };

        if songs.iter().any(|s| s.url == song.url) {
            return AddOutcome::Duplicate;
        }

        songs.push(song.clone());
        AddOutcome::Added
    }

    /// Songs in a playlist
    pub fn get(&self, name: &str) -> Option<&[SongRef]> {
        self.inner.get(name).map(Vec::as_slice)
    }

    /// Whether a playlist with that name exists
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if there are no playlists
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The underlying name -> songs map (wire representation)
    pub fn as_map(&self) -> &PlaylistMap {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(url: &str) -> SongRef {
        SongRef::new(url, "Title", "Artist")
    }

    #[test]
    fn create_singleton_playlist() {
        let mut playlists = PlaylistSet::new();
        assert_eq!(playlists.create("drive", song("a")), 1);
        assert_eq!(playlists.get("drive").unwrap().len(), 1);
    }

    #[test]
    fn create_with_existing_name_merges() {
        let mut playlists = PlaylistSet::new();
        playlists.create("drive", song("a"));
        assert_eq!(playlists.create("drive", song("b")), 2);
        assert_eq!(playlists.create("drive", song("a")), 2);
    }

    #[test]
    fn add_dedups_by_url() {
        let mut playlists = PlaylistSet::new();
        playlists.create("walk", song("a"));

        assert_eq!(playlists.add("walk", &song("b")), AddOutcome::Added);
        assert_eq!(playlists.add("walk", &song("b")), AddOutcome::Duplicate);
        assert_eq!(playlists.get("walk").unwrap().len(), 2);
    }

    #[test]
    fn add_to_missing_playlist() {
        let mut playlists = PlaylistSet::new();
        assert_eq!(
            playlists.add("nope", &song("a")),
            AddOutcome::UnknownPlaylist
        );
    }
}
