//! Persisted projects and the identity handle that owns them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::site::GeneratedSite;

/// The acting user, as reported by the external identity provider.
///
/// Passed explicitly into store operations rather than read from a global
/// session, so fakes can be substituted in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// A saved website project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub code: GeneratedSite,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project owned by `user_id` with fresh id and timestamps.
    pub fn new(name: impl Into<String>, code: GeneratedSite, user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            code,
            user_id: user_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_has_fresh_identity() {
        let a = Project::new("Site", GeneratedSite::default(), "user-1");
        let b = Project::new("Site", GeneratedSite::default(), "user-1");
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
    }
}
