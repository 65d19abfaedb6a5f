/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with the web client; served as a fallback when set
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_users_path")]
    pub users_path: PathBuf,

    #[serde(default = "default_pins_path")]
    pub pins_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = PathBuf::from(path.unwrap_or("config.toml"));
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with PINDROP_)
        settings = settings.add_source(
            config::Environment::with_prefix("PINDROP")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    ///
    /// The pin catalog is a startup precondition; the users file may be
    /// absent on first run.
    pub fn validate(&self) -> Result<()> {
        if !self.storage.pins_path.exists() {
            return Err(ServerError::Config(format!(
                "Pin catalog not found at {:?} (set PINDROP_STORAGE_PINS_PATH)",
                self.storage.pins_path
            )));
        }

        if let Some(dir) = &self.server.static_dir {
            if !dir.is_dir() {
                return Err(ServerError::Config(format!(
                    "Static directory not found at {dir:?}"
                )));
            }
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        static_dir: None,
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        users_path: default_users_path(),
        pins_path: default_pins_path(),
    }
}

fn default_users_path() -> PathBuf {
    PathBuf::from("./data/users.json")
}

fn default_pins_path() -> PathBuf {
    PathBuf::from("./data/pins.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_flat_file_layout() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.users_path, PathBuf::from("./data/users.json"));
        assert_eq!(config.storage.pins_path, PathBuf::from("./data/pins.json"));
        assert!(config.server.static_dir.is_none());
    }

    #[test]
    fn validate_requires_pin_catalog() {
        let mut config = ServerConfig::default();
        config.storage.pins_path = PathBuf::from("/definitely/not/here.json");
        assert!(config.validate().is_err());
    }
}
