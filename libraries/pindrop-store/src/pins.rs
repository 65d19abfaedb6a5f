//! Static pin catalog
//!
//! Loaded once per server process from a JSON file. A missing or malformed
//! catalog is a startup precondition failure, not a recoverable error: the
//! server has nothing to broadcast without it.

use crate::error::{Result, StoreError};
use pindrop_core::Pin;
use std::path::Path;
use tracing::info;

/// Read-mostly list of geo-tagged song pins
#[derive(Debug, Clone)]
pub struct PinCatalog {
    pins: Vec<Pin>,
}

impl PinCatalog {
    /// Load the catalog from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let raw = tokio::fs::read(path).await.map_err(|e| {
            StoreError::Catalog(format!("cannot read {}: {e}", path.display()))
        })?;

        let pins: Vec<Pin> = serde_json::from_slice(&raw).map_err(|e| {
            StoreError::Catalog(format!("cannot parse {}: {e}", path.display()))
        })?;

        info!(path = %path.display(), pins = pins.len(), "Pin catalog loaded");

        Ok(Self { pins })
    }

    /// Build a catalog from already-loaded pins (tests)
    pub fn from_pins(pins: Vec<Pin>) -> Self {
        Self { pins }
    }

    /// All pins
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Number of pins
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}
