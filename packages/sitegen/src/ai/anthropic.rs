//! Anthropic implementation of the completion model trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use sitegen::ai::AnthropicModel;
//! use sitegen::pipeline::generate_site;
//!
//! let model = AnthropicModel::from_env()?;
//! let site = generate_site(&model, &answers).await?;
//! ```

use anthropic_client::{AnthropicClient, AnthropicError, MessageRequest};
use async_trait::async_trait;

use crate::error::{Result, SitegenError};
use crate::traits::model::CompletionModel;

/// Completion model backed by the Anthropic Messages API.
#[derive(Clone, Debug)]
pub struct AnthropicModel {
    client: AnthropicClient,
}

impl AnthropicModel {
    pub fn new(client: AnthropicClient) -> Self {
        Self { client }
    }

    /// Build from `ANTHROPIC_API_KEY`.
    ///
    /// A missing key fails here, before any generation is attempted; the
    /// caller gets a config error rather than a failed network call.
    pub fn from_env() -> Result<Self> {
        let client = AnthropicClient::from_env()
            .map_err(|e| SitegenError::Config(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.client = self.client.with_model(model);
        self
    }
}

#[async_trait]
impl CompletionModel for AnthropicModel {
    async fn complete(&self, system: &str, user: &str, max_tokens: u32) -> Result<String> {
        let request =
            MessageRequest::single_turn(self.client.model(), system, user, max_tokens);

        let response = self
            .client
            .create_message(request)
            .await
            .map_err(|e| match e {
                AnthropicError::Config(msg) => SitegenError::Config(msg),
                other => SitegenError::Generation(Box::new(other)),
            })?;

        Ok(response.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_without_key_is_a_config_error() {
        // No other test in this crate touches the key.
        std::env::remove_var("ANTHROPIC_API_KEY");
        let err = AnthropicModel::from_env().unwrap_err();
        assert!(matches!(err, SitegenError::Config(_)));
    }
}
