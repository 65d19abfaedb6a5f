//! Synced player session
//!
//! Binds a [`PlayerManager`] to the sync protocol: every mutation updates the
//! in-memory model first, then persists asynchronously. Sync failures are
//! logged and swallowed; the local state stays the working truth until the
//! next successful round. No retry or backoff.

use crate::error::ClientError;
use crate::sync::Syncer;
use pindrop_core::{Pin, SongRef};
use pindrop_playback::{AddOutcome, Direction, PlayerEvent, PlayerManager, Result as PlayerResult};
use tracing::warn;

/// A user's live session: in-memory player plus merge-on-write persistence
pub struct SyncSession {
    player: PlayerManager,
    syncer: Syncer,
}

impl SyncSession {
    /// Bind a player to a syncer
    pub fn new(player: PlayerManager, syncer: Syncer) -> Self {
        Self { player, syncer }
    }

    /// Fetch the user's record and rebuild local state from it
    pub async fn hydrate(&mut self) -> crate::error::Result<()> {
        let record = self.syncer.hydrate().await?;
        self.player.hydrate(&record);
        Ok(())
    }

    /// Pin selected on the map with the "play" action
    ///
    /// Pure local mutation; nothing durable changes until the song is queued
    /// or added to a playlist.
    pub fn play_pin(&mut self, pin: &Pin) {
        self.player.select_and_play(SongRef::from(pin));
    }

    /// Pin selected on the map with the "queue" action
    pub async fn queue_pin(&mut self, pin: &Pin) {
        self.enqueue(SongRef::from(pin)).await;
    }

    /// Append a song to the queue and persist it
    ///
    /// The local queue keeps duplicates; the stored copy dedups by url on
    /// merge. The reconciled result is deliberately NOT adopted locally so
    /// the in-session queue keeps what the user queued.
    pub async fn enqueue(&mut self, song: SongRef) {
        self.player.enqueue(song);

        if let Err(e) = self.syncer.push_queue(self.player.queue().songs()).await {
            log_sync_failure("enqueue", &e);
        }
    }

    /// Toggle play/pause; local only
    pub fn toggle_play_pause(&mut self) {
        self.player.toggle_play_pause();
    }

    /// Navigate the queue; persists the new index on success
    pub async fn advance(&mut self, direction: Direction) {
        if !self.player.advance(direction) {
            return;
        }
        self.push_index().await;
    }

    /// Natural end of the current track
    pub async fn on_track_ended(&mut self) {
        self.player.on_track_ended();
        self.push_index().await;
    }

    /// Create a playlist (seeded from the current song) and persist
    pub async fn create_playlist(&mut self, name: &str) -> PlayerResult<()> {
        self.player.create_playlist(name, None)?;
        self.push_playlists().await;
        Ok(())
    }

    /// Add the current song to a playlist; persists only when it mutated
    pub async fn add_current_to_playlist(&mut self, name: &str) -> PlayerResult<AddOutcome> {
        let outcome = self.player.add_current_to_playlist(name)?;
        if outcome == AddOutcome::Added {
            self.push_playlists().await;
        }
        Ok(outcome)
    }

    /// The underlying player (UI state reads)
    pub fn player(&self) -> &PlayerManager {
        &self.player
    }

    /// Drain pending UI events
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        self.player.take_events()
    }

    async fn push_index(&mut self) {
        let index = self.player.queue().stored_index();
        if let Err(e) = self.syncer.push_queue_index(index).await {
            log_sync_failure("queue index", &e);
        }
    }

    async fn push_playlists(&mut self) {
        match self
            .syncer
            .push_playlists(self.player.playlists().as_map())
            .await
        {
            // Adopt the reconciled collection so later adds build on it
            Ok(merged) => self.player.adopt_playlists(merged),
            Err(e) => log_sync_failure("playlists", &e),
        }
    }
}

fn log_sync_failure(what: &str, err: &ClientError) {
    // Local state is retained as working truth; the server misses this
    // update until the user retries or reloads
    warn!(what, error = %err, "Sync failed, keeping local state");
}
