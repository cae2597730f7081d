//! Minimal Netlify API client
//!
//! Covers the single operation this workspace needs: creating a site from a
//! zipped file tree via multipart upload.
//!
//! # Example
//!
//! ```rust,ignore
//! use netlify_client::NetlifyClient;
//!
//! let client = NetlifyClient::from_env()?;
//! let site = client.create_site_from_zip(zip_bytes).await?;
//! println!("live at {}", site.live_url());
//! ```

pub mod error;
pub mod types;

pub use error::{NetlifyError, Result};
pub use types::Site;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};

/// Minimal Netlify API client.
#[derive(Clone)]
pub struct NetlifyClient {
    http_client: Client,
    token: String,
    base_url: String,
}

impl NetlifyClient {
    /// Create a new Netlify client with the given personal access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            token: token.into(),
            base_url: "https://api.netlify.com/api/v1".to_string(),
        }
    }

    /// Create from environment variable `NETLIFY_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("NETLIFY_TOKEN")
            .map_err(|_| NetlifyError::Config("NETLIFY_TOKEN not set".into()))?;
        Ok(Self::new(token))
    }

    /// Set a custom base URL (for tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Create a new site from a zipped file tree.
    ///
    /// The archive is uploaded as a multipart `file` field named `site.zip`;
    /// on success the API returns the new site record including its live URL.
    pub async fn create_site_from_zip(&self, zip: Vec<u8>) -> Result<Site> {
        let zip_len = zip.len();

        let part = Part::bytes(zip)
            .file_name("site.zip")
            .mime_str("application/zip")
            .map_err(|e| NetlifyError::Config(format!("invalid upload part: {}", e)))?;
        let form = Form::new().part("file", part);

        let response = self
            .http_client
            .post(format!("{}/sites", self.base_url))
            .header("Authorization", format!("Bearer {}", self.token))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Netlify request failed");
                NetlifyError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Netlify API error");
            return Err(NetlifyError::Api(format!(
                "Netlify API error: {}",
                error_text
            )));
        }

        let site: Site = response
            .json()
            .await
            .map_err(|e| NetlifyError::Parse(e.to_string()))?;

        debug!(site_id = %site.id, url = %site.url, zip_bytes = zip_len, "Netlify site created");

        Ok(site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = NetlifyClient::new("nfp-test").with_base_url("https://custom.api.com");

        assert_eq!(client.token, "nfp-test");
        assert_eq!(client.base_url, "https://custom.api.com");
    }

    #[tokio::test]
    async fn test_create_site_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/sites")
            .match_header("authorization", "Bearer nfp-test")
            .with_status(201)
            .with_body(
                r#"{
                    "id": "abc123",
                    "url": "http://brave-site.netlify.app",
                    "ssl_url": "https://brave-site.netlify.app",
                    "name": "brave-site"
                }"#,
            )
            .create_async()
            .await;

        let client = NetlifyClient::new("nfp-test").with_base_url(server.url());
        let site = client.create_site_from_zip(vec![0x50, 0x4b]).await.unwrap();

        assert_eq!(site.live_url(), "https://brave-site.netlify.app");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_site_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/sites")
            .with_status(401)
            .with_body(r#"{"message":"Access Denied"}"#)
            .create_async()
            .await;

        let client = NetlifyClient::new("bad-token").with_base_url(server.url());
        let err = client.create_site_from_zip(vec![]).await.unwrap_err();

        assert!(matches!(err, NetlifyError::Api(_)));
    }
}
