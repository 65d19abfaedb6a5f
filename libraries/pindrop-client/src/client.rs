//! HTTP access to the Pindrop server API.

use crate::error::{ClientError, Result};
use crate::types::{ApiResponse, ClientConfig, CredentialsBody, UpdateBody, UserEnvelope};
use pindrop_core::{Pin, UserRecord, UserUpdate};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// Thin wrapper over the server's REST endpoints
///
/// One instance per server; cheap to share behind an `Arc`. Merge logic does
/// not live here; see [`crate::Syncer`] for the read-merge-write protocol.
pub struct PindropClient {
    http: Client,
    base_url: String,
}

impl PindropClient {
    /// Create a new client for the given server
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Pindrop/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The normalized server base url
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /api/register
    ///
    /// `Err(Rejected)` when the username is taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        let body = CredentialsBody { username, password };
        let response = self
            .post_json(&format!("{}/api/register", self.base_url), &body)
            .await?;
        Self::expect_success(response).await
    }

    /// POST /api/login
    ///
    /// `Err(Rejected)` with the server's message on unknown user or wrong
    /// password.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let body = CredentialsBody { username, password };
        let response = self
            .post_json(&format!("{}/api/login", self.base_url), &body)
            .await?;
        Self::expect_success(response).await
    }

    /// GET /api/getUser/:username
    pub async fn fetch_user(&self, username: &str) -> Result<UserRecord> {
        let url = format!("{}/api/getUser/{username}", self.base_url);
        debug!(url = %url, "Fetching user record");

        let response = self.get(&url).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::server_error(status.as_u16(), response).await);
        }

        let envelope: UserEnvelope = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse user record: {e}")))?;
        Ok(envelope.data)
    }

    /// POST /api/updateUser
    pub async fn update_user(&self, username: &str, updates: &UserUpdate) -> Result<()> {
        let body = UpdateBody { username, updates };
        let response = self
            .post_json(&format!("{}/api/updateUser", self.base_url), &body)
            .await?;
        Self::expect_success(response).await
    }

    /// GET /api/pins, the static catalog fallback for clients without the
    /// realtime channel
    pub async fn fetch_pins(&self) -> Result<Vec<Pin>> {
        let response = self.get(&format!("{}/api/pins", self.base_url)).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::server_error(status.as_u16(), response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse pin list: {e}")))
    }

    async fn get(&self, url: &str) -> Result<Response> {
        self.http.get(url).send().await.map_err(Self::map_transport)
    }

    async fn post_json<B: serde::Serialize>(&self, url: &str, body: &B) -> Result<Response> {
        self.http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Self::map_transport)
    }

    fn map_transport(e: reqwest::Error) -> ClientError {
        if e.is_connect() || e.is_timeout() {
            ClientError::ServerUnreachable(e.to_string())
        } else {
            ClientError::Request(e)
        }
    }

    /// Decode a `{success, message}` body, turning refusals into errors
    async fn expect_success(response: Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::server_error(status.as_u16(), response).await);
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse response: {e}")))?;

        if body.success {
            Ok(())
        } else {
            Err(ClientError::Rejected(body.message))
        }
    }

    async fn server_error(status: u16, response: Response) -> ClientError {
        // Error bodies are `{success:false, message}` too, but fall back to
        // raw text for anything unexpected
        let message = match response.json::<ApiResponse>().await {
            Ok(body) => body.message,
            Err(_) => String::new(),
        };
        ClientError::Server { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation() {
        assert!(PindropClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(PindropClient::new(ClientConfig::new("http://localhost:3000")).is_ok());

        assert!(PindropClient::new(ClientConfig::new("")).is_err());
        assert!(PindropClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(PindropClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn url_normalization_strips_trailing_slash() {
        let client = PindropClient::new(ClientConfig::new("https://example.com/")).unwrap();
        assert_eq!(client.base_url(), "https://example.com");
    }
}
