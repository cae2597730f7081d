//! Deployment orchestrator with ordered host fallback.
//!
//! Generation is expensive, so a site is deployed exactly once per user
//! action even though any single hosting provider may be unreliable. The
//! deployer walks a fixed priority list of hosts strictly sequentially:
//! each attempt completes before the next begins, a failure is logged and
//! recorded rather than propagated, and only exhausting the whole list
//! surfaces an error to the caller.

use tracing::{info, warn};

use crate::error::{HostAttempt, Result, SitegenError};
use crate::traits::host::StaticHost;
use crate::types::site::GeneratedSite;

/// Result of a successful deployment.
#[derive(Debug, Clone)]
pub struct Deployment {
    /// Live URL returned by the host.
    pub url: String,
    /// Name of the host that succeeded.
    pub host: String,
}

/// Tries hosts in priority order until one publishes the site.
pub struct Deployer {
    hosts: Vec<Box<dyn StaticHost>>,
}

impl Default for Deployer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deployer {
    /// Create a deployer with no hosts; add them in priority order.
    pub fn new() -> Self {
        Self { hosts: Vec::new() }
    }

    /// Append a host at the end of the priority list.
    pub fn with_host(mut self, host: impl StaticHost + 'static) -> Self {
        self.hosts.push(Box::new(host));
        self
    }

    /// Number of configured hosts.
    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }

    /// Publish the site through the first host that accepts it.
    ///
    /// Hosts are attempted one at a time, never in parallel. The first
    /// success is terminal; remaining hosts are never contacted. When every
    /// host fails, the error carries the per-host failure reasons.
    pub async fn deploy(&self, site: &GeneratedSite) -> Result<Deployment> {
        let mut attempts = Vec::with_capacity(self.hosts.len());

        for host in &self.hosts {
            match host.publish(site).await {
                Ok(url) => {
                    info!(host = host.name(), url = %url, "site deployed");
                    return Ok(Deployment {
                        url,
                        host: host.name().to_string(),
                    });
                }
                Err(err) => {
                    warn!(host = host.name(), error = %err, "host failed, trying next");
                    attempts.push(HostAttempt {
                        host: host.name().to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        Err(SitegenError::AllHostsFailed { attempts })
    }
}
