/// Common test utilities and fixtures
use pindrop_server::{create_router, state::AppState};
use pindrop_store::{PinCatalog, UserStore};
use std::sync::Arc;
use tempfile::TempDir;

pub const SAMPLE_PINS: &str = r#"[
  {
    "id": 1,
    "artist": "Drake",
    "song": "9",
    "location": "Hyde Park, Chicago",
    "lat": 41.874,
    "lng": -87.657,
    "audio_url": "https://example.com/audio/9.mp3"
  },
  {
    "id": 2,
    "artist": "Noname",
    "song": "Diddy Bop",
    "location": "Bronzeville, Chicago",
    "lat": 41.816,
    "lng": -87.616,
    "audio_url": "https://example.com/audio/diddy-bop.mp3"
  }
]"#;

/// Build a router backed by temp-dir storage
///
/// The users file starts absent so every test begins with an empty store;
/// the pin catalog holds two sample pins.
pub async fn create_test_app() -> (axum::Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();

    let pins_path = temp_dir.path().join("pins.json");
    tokio::fs::write(&pins_path, SAMPLE_PINS).await.unwrap();
    let pins = Arc::new(PinCatalog::load(&pins_path).await.unwrap());

    let users = Arc::new(
        UserStore::open(temp_dir.path().join("users.json"))
            .await
            .unwrap(),
    );

    let app = create_router(AppState::new(users, pins), None);
    (app, temp_dir)
}

pub mod fixtures {
    pub const TEST_USERNAME: &str = "testuser";
    pub const TEST_PASSWORD: &str = "hunter2";
}
