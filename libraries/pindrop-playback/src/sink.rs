//! Audio sink trait
//!
//! The platform seam: the state machine never touches an audio API directly.
//! A browser frontend backs this with an audio element, a native client with
//! its output device, and tests with a stub.

use crate::error::Result;

/// Platform audio output driven by the [`crate::PlayerManager`]
pub trait AudioSink: Send {
    /// Assign a new source url
    fn load(&mut self, url: &str) -> Result<()>;

    /// Request playback start/resume
    ///
    /// May fail (autoplay policy, network error on the url). The manager
    /// treats such failures as non-fatal; see `select_and_play`.
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Current position in seconds
    fn position_secs(&self) -> f64;

    /// Track duration in seconds (0.0 when unknown)
    fn duration_secs(&self) -> f64;
}

/// Sink that accepts everything and produces nothing
///
/// Default for headless use and tests.
#[derive(Debug, Default)]
pub struct NullSink {
    loaded: Option<String>,
}

impl NullSink {
    /// Url of the last loaded source, if any
    pub fn loaded_url(&self) -> Option<&str> {
        self.loaded.as_deref()
    }
}

impl AudioSink for NullSink {
    fn load(&mut self, url: &str) -> Result<()> {
        self.loaded = Some(url.to_string());
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        Ok(())
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
