//! Response types for the Netlify API.

use serde::Deserialize;

/// A site record as returned by the "create site" endpoint.
///
/// The API returns many more fields; only the ones callers need are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub id: String,
    /// Live URL of the deployed site.
    pub url: String,
    /// HTTPS variant of the live URL, when available.
    #[serde(default)]
    pub ssl_url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Site {
    /// Preferred live URL: the HTTPS one when present.
    pub fn live_url(&self) -> &str {
        self.ssl_url.as_deref().unwrap_or(&self.url)
    }
}
