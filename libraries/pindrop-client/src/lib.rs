//! Pindrop sync client
//!
//! HTTP client library for the Pindrop server API, plus the read-merge-write
//! sync protocol that keeps a client's working copy of queue/playlist state
//! eventually consistent with the server store.
//!
//! # Example
//!
//! ```ignore
//! use pindrop_client::{ClientConfig, PindropClient, Syncer, SyncSession};
//! use pindrop_playback::{NullSink, PlayerManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PindropClient::new(ClientConfig::new("http://localhost:3000"))?;
//!     client.register("alice", "pw1").await?;
//!     client.login("alice", "pw1").await?;
//!
//!     let syncer = Syncer::new(client.into(), "alice");
//!     let player = PlayerManager::new(Box::new(NullSink::default()));
//!
//!     let mut session = SyncSession::new(player, syncer);
//!     session.hydrate().await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod session;
mod sync;
mod types;

// Re-export main types
pub use client::PindropClient;
pub use error::{ClientError, Result};
pub use session::SyncSession;
pub use sync::Syncer;
pub use types::{ApiResponse, ClientConfig};
