//! Player manager - core orchestration
//!
//! The authoritative in-memory model of what the UI shows and what the audio
//! sink does: current song, queue, playlists, playback state. Every mutation
//! pushes [`PlayerEvent`]s for the UI layer to drain; persistence is layered
//! on top by the sync client, which reads the manager's state after each
//! mutation.

use crate::{
    error::{PlayerError, Result},
    events::PlayerEvent,
    playlists::{AddOutcome, PlaylistSet},
    queue::PlayQueue,
    sink::AudioSink,
    types::{Direction, NowPlaying, PlaybackState},
};
use pindrop_core::{SongRef, UserRecord};

/// Playback/queue/playlist state machine
pub struct PlayerManager {
    queue: PlayQueue,
    playlists: PlaylistSet,
    current: Option<SongRef>,
    state: PlaybackState,
    sink: Box<dyn AudioSink>,
    events: Vec<PlayerEvent>,
}

impl PlayerManager {
    /// Create a manager driving the given audio sink
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            queue: PlayQueue::new(),
            playlists: PlaylistSet::new(),
            current: None,
            state: PlaybackState::Empty,
            sink,
            events: Vec::new(),
        }
    }

    /// Rebuild local state from a fetched user record
    ///
    /// If the saved index points at a song, it becomes the current song in
    /// `Loaded` state: the source is assigned but playback waits for a user
    /// gesture.
    pub fn hydrate(&mut self, record: &UserRecord) {
        self.queue = PlayQueue::from_saved(record.queue.clone(), record.queue_index);
        self.playlists = PlaylistSet::from_saved(record.playlists.clone());

        if let Some(song) = self.queue.current().cloned() {
            if let Err(e) = self.sink.load(&song.url) {
                self.events.push(PlayerEvent::Error {
                    message: e.to_string(),
                });
            }
            self.current = Some(song);
            self.set_state(PlaybackState::Loaded);
        } else {
            self.current = None;
            self.set_state(PlaybackState::Empty);
        }
    }

    /// Set `song` as current and request playback
    ///
    /// The transition to `Playing` is optimistic: if the sink rejects the
    /// load or the play request, an `Error` event is pushed but the displayed
    /// song and state do not roll back.
    pub fn select_and_play(&mut self, song: SongRef) {
        let previous = self.current.as_ref().map(|s| s.url.clone());

        self.events.push(PlayerEvent::TrackChanged {
            url: song.url.clone(),
            previous,
        });

        let url = song.url.clone();
        self.current = Some(song);
        self.set_state(PlaybackState::Playing);

        if let Err(e) = self.sink.load(&url).and_then(|()| self.sink.play()) {
            self.events.push(PlayerEvent::Error {
                message: e.to_string(),
            });
        }
    }

    /// Toggle between `Playing` and `Paused`; no-op when `Empty`
    pub fn toggle_play_pause(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                if let Err(e) = self.sink.pause() {
                    self.events.push(PlayerEvent::Error {
                        message: e.to_string(),
                    });
                }
                self.set_state(PlaybackState::Paused);
            }
            PlaybackState::Paused | PlaybackState::Loaded => {
                if let Err(e) = self.sink.play() {
                    self.events.push(PlayerEvent::Error {
                        message: e.to_string(),
                    });
                }
                self.set_state(PlaybackState::Playing);
            }
            PlaybackState::Empty => {}
        }
    }

    /// Step the queue selection and play the new entry
    ///
    /// Out-of-bounds requests are silently ignored. Returns `true` when the
    /// position moved, so the caller knows to persist the new index.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let Some(song) = self.queue.step(direction).cloned() else {
            return false;
        };
        self.select_and_play(song);
        true
    }

    /// Natural end of the current track, as reported by the audio subsystem
    ///
    /// Behaves like `advance(Next)` when there is a next entry; at the end of
    /// the queue the current song transitions to `Empty` (stop, no looping).
    pub fn on_track_ended(&mut self) {
        if self.queue.has_next() {
            self.advance(Direction::Next);
            return;
        }

        self.queue.clear_selection();
        self.current = None;
        self.set_state(PlaybackState::Empty);
        self.events.push(PlayerEvent::QueueEnded);
    }

    /// Append a song to the queue; always succeeds, duplicates allowed
    pub fn enqueue(&mut self, song: SongRef) {
        self.queue.push(song);
        self.events.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Play the song at `index` in the queue
    ///
    /// Returns `true` when the index was valid and the selection moved.
    pub fn play_at(&mut self, index: usize) -> bool {
        let Some(song) = self.queue.select(index).cloned() else {
            return false;
        };
        self.select_and_play(song);
        true
    }

    /// Create a playlist seeded with `seed`, or with the current song
    ///
    /// Fails with [`PlayerError::NoCurrentSong`] when no seed is supplied and
    /// nothing is playing.
    pub fn create_playlist(&mut self, name: &str, seed: Option<SongRef>) -> Result<()> {
        let seed = match seed.or_else(|| self.current.clone()) {
            Some(song) => song,
            None => return Err(PlayerError::NoCurrentSong),
        };

        let length = self.playlists.create(name, seed);
        self.events.push(PlayerEvent::PlaylistChanged {
            name: name.to_string(),
            length,
        });
        Ok(())
    }

    /// Add the current song to a named playlist
    ///
    /// Only `Added` mutates; `Duplicate` and `UnknownPlaylist` are
    /// user-visible notices, `NoCurrentSong` likewise.
    pub fn add_current_to_playlist(&mut self, name: &str) -> Result<AddOutcome> {
        let Some(song) = self.current.clone() else {
            return Err(PlayerError::NoCurrentSong);
        };

        let outcome = self.playlists.add(name, &song);
        if outcome == AddOutcome::Added {
            self.events.push(PlayerEvent::PlaylistChanged {
                name: name.to_string(),
                length: self.playlists.get(name).map_or(0, <[SongRef]>::len),
            });
        }
        Ok(outcome)
    }

    /// Adopt a reconciled playlist collection after a sync round
    pub fn adopt_playlists(&mut self, playlists: pindrop_core::PlaylistMap) {
        self.playlists = PlaylistSet::from_saved(playlists);
    }

    /// The queue
    pub fn queue(&self) -> &PlayQueue {
        &self.queue
    }

    /// The playlist collection
    pub fn playlists(&self) -> &PlaylistSet {
        &self.playlists
    }

    /// The current song, if any
    pub fn current(&self) -> Option<&SongRef> {
        self.current.as_ref()
    }

    /// The current-song state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Snapshot for the UI: current song plus sink-reported position
    pub fn now_playing(&self) -> NowPlaying {
        NowPlaying {
            song: self.current.clone(),
            is_playing: self.state == PlaybackState::Playing,
            position_secs: self.sink.position_secs(),
            duration_secs: self.sink.duration_secs(),
        }
    }

    /// Drain accumulated events
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.events.push(PlayerEvent::StateChanged { state });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::NullSink;

    /// Sink whose `play` always fails, for the optimistic-UI tests
    #[derive(Default)]
    struct RejectingSink;

    impl AudioSink for RejectingSink {
        fn load(&mut self, _url: &str) -> Result<()> {
            Ok(())
        }

        fn play(&mut self) -> Result<()> {
            Err(PlayerError::Sink("autoplay blocked".to_string()))
        }

        fn pause(&mut self) -> Result<()> {
            Ok(())
        }

        fn position_secs(&self) -> f64 {
            0.0
        }

        fn duration_secs(&self) -> f64 {
            0.0
        }
    }

    fn song(url: &str) -> SongRef {
        SongRef::new(url, format!("Title {url}"), "Artist")
    }

    fn player() -> PlayerManager {
        PlayerManager::new(Box::new(NullSink::default()))
    }

    fn player_with_queue(urls: &[&str], start: usize) -> PlayerManager {
        let mut p = player();
        for url in urls {
            p.enqueue(song(url));
        }
        p.play_at(start);
        p
    }

    #[test]
    fn enqueue_n_times_gives_length_n() {
        let mut p = player();
        for _ in 0..5 {
            p.enqueue(song("same.mp3"));
        }
        assert_eq!(p.queue().len(), 5);
    }

    #[test]
    fn select_and_play_sets_current_and_state() {
        let mut p = player();
        p.select_and_play(song("a.mp3"));

        assert_eq!(p.current().unwrap().url, "a.mp3");
        assert_eq!(p.state(), PlaybackState::Playing);
        assert!(p.now_playing().is_playing);
    }

    #[test]
    fn playback_failure_does_not_roll_back_state() {
        let mut p = PlayerManager::new(Box::new(RejectingSink));
        p.select_and_play(song("a.mp3"));

        // Optimistic UI: still "playing" the selected song
        assert_eq!(p.state(), PlaybackState::Playing);
        assert_eq!(p.current().unwrap().url, "a.mp3");

        let events = p.take_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, PlayerEvent::Error { .. })));
    }

    #[test]
    fn toggle_play_pause_round_trip() {
        let mut p = player();
        p.select_and_play(song("a.mp3"));

        p.toggle_play_pause();
        assert_eq!(p.state(), PlaybackState::Paused);

        p.toggle_play_pause();
        assert_eq!(p.state(), PlaybackState::Playing);
    }

    #[test]
    fn toggle_is_noop_when_empty() {
        let mut p = player();
        p.toggle_play_pause();
        assert_eq!(p.state(), PlaybackState::Empty);
        assert!(p.take_events().is_empty());
    }

    #[test]
    fn advance_next_then_previous_restores_song_and_index() {
        let mut p = player_with_queue(&["a", "b", "c"], 1);

        assert!(p.advance(Direction::Next));
        assert_eq!(p.current().unwrap().url, "c");

        assert!(p.advance(Direction::Previous));
        assert_eq!(p.current().unwrap().url, "b");
        assert_eq!(p.queue().index(), Some(1));
    }

    #[test]
    fn advance_out_of_bounds_is_silently_ignored() {
        let mut p = player_with_queue(&["a", "b"], 1);

        assert!(!p.advance(Direction::Next));
        assert_eq!(p.current().unwrap().url, "b");
        assert_eq!(p.queue().index(), Some(1));
    }

    #[test]
    fn track_ended_mid_queue_advances() {
        let mut p = player_with_queue(&["a", "b"], 0);

        p.on_track_ended();
        assert_eq!(p.current().unwrap().url, "b");
        assert_eq!(p.state(), PlaybackState::Playing);
    }

    #[test]
    fn track_ended_at_last_index_stops() {
        let mut p = player_with_queue(&["a", "b"], 1);

        p.on_track_ended();
        assert!(p.current().is_none());
        assert_eq!(p.state(), PlaybackState::Empty);
        assert_eq!(p.queue().stored_index(), -1);
        // Queue contents survive; only the selection is dropped
        assert_eq!(p.queue().len(), 2);

        let events = p.take_events();
        assert!(events.contains(&PlayerEvent::QueueEnded));
    }

    #[test]
    fn create_playlist_without_current_song_fails() {
        let mut p = player();
        let err = p.create_playlist("drive", None).unwrap_err();
        assert!(matches!(err, PlayerError::NoCurrentSong));
    }

    #[test]
    fn create_playlist_seeds_from_current_song() {
        let mut p = player();
        p.select_and_play(song("a.mp3"));

        p.create_playlist("drive", None).unwrap();
        assert_eq!(p.playlists().get("drive").unwrap().len(), 1);
        assert_eq!(p.playlists().get("drive").unwrap()[0].url, "a.mp3");
    }

    #[test]
    fn add_current_twice_keeps_single_entry() {
        let mut p = player();
        p.select_and_play(song("a.mp3"));
        p.create_playlist("drive", None).unwrap();

        assert_eq!(
            p.add_current_to_playlist("drive").unwrap(),
            AddOutcome::Duplicate
        );
        assert_eq!(p.playlists().get("drive").unwrap().len(), 1);
    }

    #[test]
    fn add_current_without_song_reports_notice() {
        let mut p = player();
        assert!(matches!(
            p.add_current_to_playlist("drive"),
            Err(PlayerError::NoCurrentSong)
        ));
    }

    #[test]
    fn hydrate_restores_loaded_current_song() {
        let mut record = UserRecord::new("pw");
        record.queue = vec![song("a"), song("b")];
        record.queue_index = 1;

        let mut p = player();
        p.hydrate(&record);

        assert_eq!(p.current().unwrap().url, "b");
        assert_eq!(p.state(), PlaybackState::Loaded);
        assert!(!p.now_playing().is_playing);
    }

    #[test]
    fn hydrate_with_sentinel_index_stays_empty() {
        let record = UserRecord::new("pw");
        let mut p = player();
        p.hydrate(&record);

        assert!(p.current().is_none());
        assert_eq!(p.state(), PlaybackState::Empty);
    }

    #[test]
    fn events_report_track_and_queue_changes() {
        let mut p = player();
        p.enqueue(song("a"));
        p.select_and_play(song("a"));

        let events = p.take_events();
        assert!(events.contains(&PlayerEvent::QueueChanged { length: 1 }));
        assert!(events.iter().any(|e| matches!(
            e,
            PlayerEvent::TrackChanged { url, .. } if url == "a"
        )));
        assert!(p.take_events().is_empty());
    }
}
