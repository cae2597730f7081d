//! The three-part code artifact produced by generation.

use serde::{Deserialize, Serialize};

/// File name used for the markup part in archives and host payloads.
pub const INDEX_FILE: &str = "index.html";
/// File name used for the stylesheet part.
pub const STYLES_FILE: &str = "styles.css";
/// File name used for the script part.
pub const SCRIPT_FILE: &str = "script.js";

/// A generated website: markup, stylesheet, and script.
///
/// Every field is always present as a string, possibly empty. A missing
/// code block in a model response degrades to an empty string for that
/// field; it is never an error. Edits create a new value rather than
/// mutating in place, so holding an older `GeneratedSite` is all that
/// history needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSite {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl GeneratedSite {
    pub fn new(
        html: impl Into<String>,
        css: impl Into<String>,
        js: impl Into<String>,
    ) -> Self {
        Self {
            html: html.into(),
            css: css.into(),
            js: js.into(),
        }
    }

    /// True when all three parts are empty.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.css.is_empty() && self.js.is_empty()
    }

    /// The site as named files, in the order they are packaged for hosts
    /// and archives.
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            (INDEX_FILE, self.html.as_str()),
            (STYLES_FILE, self.css.as_str()),
            (SCRIPT_FILE, self.js.as_str()),
        ]
    }
}
