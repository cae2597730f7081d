//! Project store trait.
//!
//! The external document store is consumed through this interface and
//! injected explicitly, never reached through a module-level singleton.
//! Every operation takes the acting [`User`] and enforces ownership:
//! mutating or deleting a record owned by someone else fails with
//! [`SitegenError::Authorization`] and leaves the record unchanged.
//!
//! [`SitegenError::Authorization`]: crate::error::SitegenError::Authorization

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::types::{project::Project, project::User, site::GeneratedSite};

/// CRUD over saved projects, restricted to the acting user.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Save a new project and return the created record.
    async fn save(&self, user: &User, name: &str, code: GeneratedSite) -> Result<Project>;

    /// Fetch one project by id.
    async fn get(&self, user: &User, id: Uuid) -> Result<Project>;

    /// All projects owned by the user, newest first.
    async fn list(&self, user: &User) -> Result<Vec<Project>>;

    /// Update code and/or name of an existing project. Fields left as
    /// `None` are unchanged; `updated_at` is always refreshed.
    async fn update(
        &self,
        user: &User,
        id: Uuid,
        code: Option<GeneratedSite>,
        name: Option<String>,
    ) -> Result<Project>;

    /// Delete a project.
    async fn delete(&self, user: &User, id: Uuid) -> Result<()>;

    /// Copy a project's code into a new record with a fresh id and
    /// timestamps; the copy's name gets a " (Copy)" suffix.
    async fn duplicate(&self, user: &User, id: Uuid) -> Result<Project>;
}
