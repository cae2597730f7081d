//! Request and response types for the Vercel deployments API.

use serde::{Deserialize, Serialize};

/// One named file with inline content.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentFile {
    /// File path within the deployment, e.g. `index.html`.
    pub file: String,
    /// Inline file content.
    pub data: String,
}

impl DeploymentFile {
    pub fn new(file: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            data: data.into(),
        }
    }
}

/// Request body for the deployments endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentRequest {
    pub name: String,
    pub files: Vec<DeploymentFile>,
}

/// A deployment record as returned by the API.
///
/// The API returns many more fields; only the ones callers need are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Deployment {
    pub id: String,
    /// Hostname of the live deployment, without scheme.
    pub url: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Deployment {
    /// Live URL with an explicit HTTPS scheme.
    pub fn live_url(&self) -> String {
        if self.url.starts_with("http") {
            self.url.clone()
        } else {
            format!("https://{}", self.url)
        }
    }
}
