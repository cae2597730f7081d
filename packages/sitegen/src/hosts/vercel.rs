//! Vercel hosting adapter: discrete named files with inline content.

use async_trait::async_trait;
use vercel_client::{DeploymentFile, VercelClient};

use crate::error::{Result, SitegenError};
use crate::traits::host::StaticHost;
use crate::types::site::GeneratedSite;

const HOST_NAME: &str = "vercel";

/// Publishes sites through the Vercel deployments endpoint.
pub struct VercelHost {
    client: Option<VercelClient>,
}

impl VercelHost {
    pub fn new(client: VercelClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Build from `VERCEL_TOKEN`. An absent token is remembered and
    /// reported as a publish failure, so the deployer can fall back
    /// instead of aborting the whole deploy.
    pub fn from_env() -> Self {
        Self {
            client: VercelClient::from_env().ok(),
        }
    }

    fn deployment_name() -> String {
        format!("webgenie-{}", chrono::Utc::now().timestamp_millis())
    }
}

#[async_trait]
impl StaticHost for VercelHost {
    fn name(&self) -> &str {
        HOST_NAME
    }

    async fn publish(&self, site: &GeneratedSite) -> Result<String> {
        let client = self.client.as_ref().ok_or_else(|| SitegenError::Host {
            host: HOST_NAME.to_string(),
            source: "VERCEL_TOKEN not set".into(),
        })?;

        let files = site
            .files()
            .into_iter()
            .map(|(name, content)| DeploymentFile::new(name, content))
            .collect();

        let deployment = client
            .create_deployment(Self::deployment_name(), files)
            .await
            .map_err(|e| SitegenError::Host {
                host: HOST_NAME.to_string(),
                source: Box::new(e),
            })?;

        Ok(deployment.live_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_token_is_a_publish_failure() {
        let host = VercelHost { client: None };
        let err = host.publish(&GeneratedSite::default()).await.unwrap_err();
        assert!(matches!(err, SitegenError::Host { ref host, .. } if host == "vercel"));
    }

    #[test]
    fn test_deployment_names_carry_prefix() {
        assert!(VercelHost::deployment_name().starts_with("webgenie-"));
    }
}
