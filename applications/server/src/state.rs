/// Shared application state
use pindrop_store::{PinCatalog, UserStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub pins: Arc<PinCatalog>,
}

impl AppState {
    pub fn new(users: Arc<UserStore>, pins: Arc<PinCatalog>) -> Self {
        Self { users, pins }
    }
}
