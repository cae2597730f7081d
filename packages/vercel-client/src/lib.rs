//! Minimal Vercel API client
//!
//! Covers the single operation this workspace needs: creating a deployment
//! from a list of named files with inline content.
//!
//! # Example
//!
//! ```rust,ignore
//! use vercel_client::{DeploymentFile, VercelClient};
//!
//! let client = VercelClient::from_env()?;
//! let deployment = client
//!     .create_deployment(
//!         "my-site",
//!         vec![DeploymentFile::new("index.html", "<h1>hi</h1>")],
//!     )
//!     .await?;
//! println!("live at {}", deployment.live_url());
//! ```

pub mod error;
pub mod types;

pub use error::{Result, VercelError};
pub use types::{Deployment, DeploymentFile, DeploymentRequest};

use reqwest::Client;
use tracing::{debug, warn};

/// Minimal Vercel API client.
#[derive(Clone)]
pub struct VercelClient {
    http_client: Client,
    token: String,
    base_url: String,
}

impl VercelClient {
    /// Create a new Vercel client with the given access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            token: token.into(),
            base_url: "https://api.vercel.com".to_string(),
        }
    }

    /// Create from environment variable `VERCEL_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("VERCEL_TOKEN")
            .map_err(|_| VercelError::Config("VERCEL_TOKEN not set".into()))?;
        Ok(Self::new(token))
    }

    /// Set a custom base URL (for tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Create a deployment from named inline files.
    pub async fn create_deployment(
        &self,
        name: impl Into<String>,
        files: Vec<DeploymentFile>,
    ) -> Result<Deployment> {
        let request = DeploymentRequest {
            name: name.into(),
            files,
        };

        let response = self
            .http_client
            .post(format!("{}/v13/deployments", self.base_url))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Vercel request failed");
                VercelError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Vercel API error");
            return Err(VercelError::Api(format!(
                "Vercel API error: {}",
                error_text
            )));
        }

        let deployment: Deployment = response
            .json()
            .await
            .map_err(|e| VercelError::Parse(e.to_string()))?;

        debug!(
            deployment_id = %deployment.id,
            url = %deployment.url,
            files = request.files.len(),
            "Vercel deployment created"
        );

        Ok(deployment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = VercelClient::new("vc-test").with_base_url("https://custom.api.com");

        assert_eq!(client.token, "vc-test");
        assert_eq!(client.base_url, "https://custom.api.com");
    }

    #[test]
    fn test_live_url_adds_scheme() {
        let deployment = Deployment {
            id: "dpl_1".into(),
            url: "my-site.vercel.app".into(),
            status: None,
        };
        assert_eq!(deployment.live_url(), "https://my-site.vercel.app");
    }

    #[tokio::test]
    async fn test_create_deployment_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v13/deployments")
            .match_header("authorization", "Bearer vc-test")
            .with_status(200)
            .with_body(r#"{"id": "dpl_1", "url": "my-site.vercel.app", "status": "READY"}"#)
            .create_async()
            .await;

        let client = VercelClient::new("vc-test").with_base_url(server.url());
        let deployment = client
            .create_deployment("my-site", vec![DeploymentFile::new("index.html", "<h1>")])
            .await
            .unwrap();

        assert_eq!(deployment.live_url(), "https://my-site.vercel.app");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_deployment_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v13/deployments")
            .with_status(403)
            .with_body(r#"{"error":{"code":"forbidden"}}"#)
            .create_async()
            .await;

        let client = VercelClient::new("bad-token").with_base_url(server.url());
        let err = client
            .create_deployment("my-site", vec![])
            .await
            .unwrap_err();

        assert!(matches!(err, VercelError::Api(_)));
    }
}
