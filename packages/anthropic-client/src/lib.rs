//! Pure Anthropic REST API client
//!
//! A clean, minimal client for the Anthropic Messages API with no
//! domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use anthropic_client::{AnthropicClient, MessageRequest};
//!
//! let client = AnthropicClient::from_env()?;
//!
//! let response = client
//!     .create_message(MessageRequest::single_turn(
//!         client.model(),
//!         "You are a helpful assistant.",
//!         "Hello!",
//!         1024,
//!     ))
//!     .await?;
//!
//! println!("{}", response.text);
//! ```

pub mod error;
pub mod types;

pub use error::{AnthropicError, Result};
pub use types::{Message, MessageRequest, MessageResponse, Usage};

use reqwest::Client;
use tracing::{debug, warn};

/// Default model used when the caller does not override it.
pub const DEFAULT_MODEL: &str = "claude-3-7-sonnet-20250219";

/// API version header required by the Messages API.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Pure Anthropic API client.
#[derive(Clone, Debug)]
pub struct AnthropicClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl AnthropicClient {
    /// Create a new Anthropic client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.anthropic.com".to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create from environment variable `ANTHROPIC_API_KEY`.
    ///
    /// A missing key is a configuration error; no request is ever attempted
    /// without one.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| AnthropicError::Config("ANTHROPIC_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies and tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model (default: [`DEFAULT_MODEL`]).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a message.
    ///
    /// Issues exactly one request to the Messages API and returns the
    /// concatenated text of the response content blocks.
    pub async fn create_message(&self, request: MessageRequest) -> Result<MessageResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Anthropic request failed");
                AnthropicError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Anthropic API error");
            return Err(AnthropicError::Api(format!(
                "Anthropic API error: {}",
                error_text
            )));
        }

        let raw: types::MessageResponseRaw = response
            .json()
            .await
            .map_err(|e| AnthropicError::Parse(e.to_string()))?;

        let text: String = raw
            .content
            .iter()
            .filter(|b| b.block_type == "text")
            .map(|b| b.text.as_str())
            .collect();

        if text.is_empty() {
            return Err(AnthropicError::Api("No text content in response".into()));
        }

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Anthropic message completed"
        );

        Ok(MessageResponse {
            text,
            usage: raw.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = AnthropicClient::new("sk-ant-test")
            .with_base_url("https://custom.api.com")
            .with_model("claude-3-5-haiku-latest");

        assert_eq!(client.api_key, "sk-ant-test");
        assert_eq!(client.base_url, "https://custom.api.com");
        assert_eq!(client.model(), "claude-3-5-haiku-latest");
    }

    #[tokio::test]
    async fn test_create_message_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .match_header("x-api-key", "sk-ant-test")
            .match_header("anthropic-version", ANTHROPIC_VERSION)
            .with_status(200)
            .with_body(
                r#"{
                    "content": [
                        {"type": "text", "text": "Hello "},
                        {"type": "text", "text": "world"}
                    ],
                    "usage": {"input_tokens": 10, "output_tokens": 5}
                }"#,
            )
            .create_async()
            .await;

        let client = AnthropicClient::new("sk-ant-test").with_base_url(server.url());
        let response = client
            .create_message(MessageRequest::single_turn(
                DEFAULT_MODEL,
                "system",
                "user",
                256,
            ))
            .await
            .unwrap();

        assert_eq!(response.text, "Hello world");
        assert_eq!(response.usage.unwrap().output_tokens, 5);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_message_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/messages")
            .with_status(429)
            .with_body(r#"{"type":"error","error":{"type":"rate_limit_error"}}"#)
            .create_async()
            .await;

        let client = AnthropicClient::new("sk-ant-test").with_base_url(server.url());
        let err = client
            .create_message(MessageRequest::single_turn(DEFAULT_MODEL, "s", "u", 256))
            .await
            .unwrap_err();

        assert!(matches!(err, AnthropicError::Api(_)));
    }
}
