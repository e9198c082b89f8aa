//! REST client for the Disha assistant backend
//!
//! The backend exposes a single `POST {base_url}/chat` endpoint that accepts
//! a [`ChatRequest`] and answers with `{ "reply": ... }`, where the reply is
//! either a string or a list of `{type, text}` blocks.
//!
//! The client does no PII scrubbing of its own. Callers are expected to send
//! already-scrubbed text.
//!
//! # Example
//!
//! ```rust,ignore
//! use assistant_client::{AssistantClient, ChatRequest};
//!
//! let client = AssistantClient::from_env()?;
//! let reply = client
//!     .chat(&ChatRequest::new("Find me jobs", Some(user_id), false))
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{AssistantError, Result};
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

/// Default request timeout for chat calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Assistant backend client.
#[derive(Clone)]
pub struct AssistantClient {
    http_client: Client,
    base_url: String,
}

impl AssistantClient {
    /// Create a client for the backend rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(AssistantError::Config("assistant base URL is empty".into()));
        }

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AssistantError::Config(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create from environment variable `ASSISTANT_API_URL`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("ASSISTANT_API_URL")
            .map_err(|_| AssistantError::Config("ASSISTANT_API_URL not set".into()))?;
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a chat message and return the reply as display text.
    pub async fn chat(&self, request: &ChatRequest) -> Result<String> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat", self.base_url))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Assistant request failed");
                AssistantError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Assistant API error");
            return Err(AssistantError::Api(format!(
                "assistant returned {}: {}",
                status, error_text
            )));
        }

        let body: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| AssistantError::Parse(e.to_string()))?;

        debug!(
            is_guest = request.is_guest,
            duration_ms = start.elapsed().as_millis(),
            "Assistant chat completed"
        );

        Ok(body.into_text())
    }
}
