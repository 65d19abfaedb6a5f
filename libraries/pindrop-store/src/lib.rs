//! Pindrop server-side storage
//!
//! Two flat JSON documents back the whole server:
//! - a username -> [`pindrop_core::UserRecord`] map ([`UserStore`])
//! - a static list of geo-tagged pins ([`PinCatalog`])
//!
//! The user store is the durable source of truth for queue/playlist state;
//! every mutation patches one user's entry in memory under a write lock, then
//! rewrites the whole document atomically. The pin catalog is loaded once at
//! process start and never mutated.

pub mod error;
pub mod pins;
pub mod users;

pub use error::{Result, StoreError};
pub use pins::PinCatalog;
pub use users::UserStore;
