/// API route modules
pub mod auth;
pub mod health;
pub mod pins;
pub mod users;

use serde::{Deserialize, Serialize};

/// The `{success, message}` body shared by register/login/updateUser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
