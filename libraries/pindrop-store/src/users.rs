//! User record store
//!
//! One JSON document mapping username -> record, loaded into memory at
//! startup and rewritten in full after every successful mutation. Mutations
//! patch a single user's entry while holding the write lock, so concurrent
//! updates to different usernames cannot overwrite each other with stale
//! copies of the document.
//!
//! The rewrite goes through a temp file and rename; readers of the file never
//! observe a torn document.

use crate::error::{Result, StoreError};
use pindrop_core::{UserRecord, UserUpdate};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

type RecordMap = HashMap<String, UserRecord>;

/// Durable per-user state, keyed by username
pub struct UserStore {
    path: PathBuf,
    records: RwLock<RecordMap>,
}

impl UserStore {
    /// Open the store at `path`
    ///
    /// A missing file means an empty store (first run); a present but
    /// malformed file is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let records: RecordMap = match tokio::fs::read(&path).await {
            Ok(raw) => serde_json::from_slice(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No users file yet, starting empty");
                RecordMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        info!(path = %path.display(), users = records.len(), "User store opened");

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Register a new user with an empty record
    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        let mut records = self.records.write().await;

        if records.contains_key(username) {
            return Err(StoreError::DuplicateUser(username.to_string()));
        }

        records.insert(username.to_string(), UserRecord::new(password));
        self.persist(&records).await?;

        info!(username, "User registered");
        Ok(())
    }

    /// Check credentials
    ///
    /// Plaintext equality compare; see DESIGN.md for the hardening note.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        let records = self.records.read().await;
        let record = records
            .get(username)
            .ok_or_else(|| StoreError::UserNotFound(username.to_string()))?;

        if record.password != password {
            return Err(StoreError::BadCredentials);
        }
        Ok(())
    }

    /// Fetch a user's record
    pub async fn get(&self, username: &str) -> Result<UserRecord> {
        let records = self.records.read().await;
        records
            .get(username)
            .cloned()
            .ok_or_else(|| StoreError::UserNotFound(username.to_string()))
    }

    /// Merge a partial update into a user's record and rewrite the document
    ///
    /// Queue and playlists union by song url; `queueIndex` overwrites. The
    /// merge itself lives on [`UserRecord::apply_update`] so client and
    /// server share one implementation.
    pub async fn apply_update(&self, username: &str, update: &UserUpdate) -> Result<()> {
        let mut records = self.records.write().await;

        let record = records
            .get_mut(username)
            .ok_or_else(|| StoreError::UserNotFound(username.to_string()))?;
        record.apply_update(update);

        self.persist(&records).await?;

        debug!(username, "User record updated");
        Ok(())
    }

    /// All known usernames (CLI listing)
    pub async fn usernames(&self) -> Vec<String> {
        let records = self.records.read().await;
        let mut names: Vec<String> = records.keys().cloned().collect();
        names.sort();
        names
    }

    /// Rewrite the whole document, temp file + rename
    ///
    /// Called with the write lock held so rewrites are serialized.
    async fn persist(&self, records: &RecordMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let raw = serde_json::to_vec_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }
}
