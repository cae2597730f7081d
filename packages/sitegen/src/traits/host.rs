//! Static hosting provider trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::site::GeneratedSite;

/// An external static-hosting service capable of publishing a site and
/// returning its live URL.
///
/// Each implementation packages the same [`GeneratedSite`] into its own
/// submission shape (archive upload, inline file list). A packaging failure
/// counts as a publish failure; the deployer treats both identically when
/// falling back to the next host.
#[async_trait]
pub trait StaticHost: Send + Sync {
    /// Short provider name used in logs and failure reports.
    fn name(&self) -> &str;

    /// Publish the site and return the live URL.
    async fn publish(&self, site: &GeneratedSite) -> Result<String>;
}
