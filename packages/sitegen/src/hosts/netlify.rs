//! Netlify hosting adapter: zip archive via multipart upload.

use async_trait::async_trait;
use netlify_client::NetlifyClient;

use crate::error::{Result, SitegenError};
use crate::export::write_archive;
use crate::traits::host::StaticHost;
use crate::types::site::GeneratedSite;

const HOST_NAME: &str = "netlify";

/// Publishes sites through the Netlify "create site" endpoint.
pub struct NetlifyHost {
    client: Option<NetlifyClient>,
}

impl NetlifyHost {
    pub fn new(client: NetlifyClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Build from `NETLIFY_TOKEN`. An absent token is remembered and
    /// reported as a publish failure, so the deployer can fall back
    /// instead of aborting the whole deploy.
    pub fn from_env() -> Self {
        Self {
            client: NetlifyClient::from_env().ok(),
        }
    }
}

#[async_trait]
impl StaticHost for NetlifyHost {
    fn name(&self) -> &str {
        HOST_NAME
    }

    async fn publish(&self, site: &GeneratedSite) -> Result<String> {
        let client = self.client.as_ref().ok_or_else(|| SitegenError::Host {
            host: HOST_NAME.to_string(),
            source: "NETLIFY_TOKEN not set".into(),
        })?;

        let zip = write_archive(site)?;

        let created = client
            .create_site_from_zip(zip)
            .await
            .map_err(|e| SitegenError::Host {
                host: HOST_NAME.to_string(),
                source: Box::new(e),
            })?;

        Ok(created.live_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_token_is_a_publish_failure() {
        let host = NetlifyHost { client: None };
        let err = host.publish(&GeneratedSite::default()).await.unwrap_err();
        assert!(matches!(err, SitegenError::Host { ref host, .. } if host == "netlify"));
    }
}
