//! Wire types for the Pindrop server API.

use pindrop_core::{UserRecord, UserUpdate};
use serde::{Deserialize, Serialize};

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base url, e.g. `http://localhost:3000`
    pub url: String,
}

impl ClientConfig {
    /// Create a configuration for the given server url
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// `{success, message}` body used by register/login/updateUser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// `{success, data}` body returned by getUser
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserEnvelope {
    #[allow(dead_code)]
    pub success: bool,
    pub data: UserRecord,
}

/// Body of a register/login request
#[derive(Debug, Serialize)]
pub(crate) struct CredentialsBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of an updateUser request
#[derive(Debug, Serialize)]
pub(crate) struct UpdateBody<'a> {
    pub username: &'a str,
    pub updates: &'a UserUpdate,
}
