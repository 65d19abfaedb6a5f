//! Pindrop Server Library
//!
//! Map-based music sharing server: flat-file user record store, static pin
//! catalog, REST API plus a realtime pin broadcast channel.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
