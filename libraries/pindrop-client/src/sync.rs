//! Read-merge-write sync protocol
//!
//! Persisting a local mutation is a three-step round:
//! 1. fetch the user's current server-side record (full read)
//! 2. union-merge the local collection into the server's, keyed by song url
//!    (server order first, local-only entries appended)
//! 3. send the merged value as the field update, and hand the merged result
//!    back to the caller so subsequent operations build on reconciled state
//!
//! Rounds for one user are serialized through a single-flight lock: two
//! mutations fired in quick succession from this client cannot interleave
//! their read and write steps and silently drop each other. The same race
//! across two separate devices remains an accepted lost-update window.
//!
//! `queueIndex` is exempt from all of this: it is last-write-wins and is
//! pushed as a plain overwrite with no read round.

use crate::client::PindropClient;
use crate::error::Result;
use pindrop_core::{merge, PlaylistMap, SongRef, UserRecord, UserUpdate};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Merge-on-write persistence for one user's record
pub struct Syncer {
    client: Arc<PindropClient>,
    username: String,
    /// Serializes read-merge-write rounds issued by this client
    flight: Mutex<()>,
}

impl Syncer {
    /// Create a syncer for `username`
    pub fn new(client: Arc<PindropClient>, username: impl Into<String>) -> Self {
        Self {
            client,
            username: username.into(),
            flight: Mutex::new(()),
        }
    }

    /// The username this syncer persists for
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Fetch the full server-side record (initial hydration)
    pub async fn hydrate(&self) -> Result<UserRecord> {
        self.client.fetch_user(&self.username).await
    }

    /// Persist the local queue; returns the reconciled queue
    pub async fn push_queue(&self, local: &[SongRef]) -> Result<Vec<SongRef>> {
        let _guard = self.flight.lock().await;

        let record = self.client.fetch_user(&self.username).await?;
        let merged = merge::union_merged(&record.queue, local);

        self.client
            .update_user(&self.username, &UserUpdate::queue(merged.clone()))
            .await?;

        debug!(username = %self.username, songs = merged.len(), "Queue synced");
        Ok(merged)
    }

    /// Persist the local playlists; returns the reconciled collection
    pub async fn push_playlists(&self, local: &PlaylistMap) -> Result<PlaylistMap> {
        let _guard = self.flight.lock().await;

        let record = self.client.fetch_user(&self.username).await?;
        let mut merged = record.playlists;
        merge::merge_playlists(&mut merged, local);

        self.client
            .update_user(&self.username, &UserUpdate::playlists(merged.clone()))
            .await?;

        debug!(username = %self.username, playlists = merged.len(), "Playlists synced");
        Ok(merged)
    }

    /// Persist the queue position (overwrite, no merge)
    pub async fn push_queue_index(&self, index: i64) -> Result<()> {
        let _guard = self.flight.lock().await;

        self.client
            .update_user(&self.username, &UserUpdate::queue_index(index))
            .await?;

        debug!(username = %self.username, index, "Queue index synced");
        Ok(())
    }
}
