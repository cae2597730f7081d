//! In-memory project store for testing and development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{Result, SitegenError};
use crate::traits::store::ProjectStore;
use crate::types::{project::Project, project::User, site::GeneratedSite};

/// In-memory project storage.
///
/// Useful for testing and development. Not suitable for production as data
/// is lost on restart. Ownership rules match the external store contract:
/// operating on a record owned by another user is an authorization failure,
/// not a not-found.
pub struct MemoryProjectStore {
    projects: RwLock<HashMap<Uuid, Project>>,
}

impl Default for MemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProjectStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(HashMap::new()),
        }
    }

    /// Clear all stored projects.
    pub fn clear(&self) {
        self.projects.write().unwrap().clear();
    }

    /// Number of stored projects, across all owners.
    pub fn project_count(&self) -> usize {
        self.projects.read().unwrap().len()
    }

    fn owned(&self, user: &User, id: Uuid) -> Result<Project> {
        let projects = self.projects.read().unwrap();
        match projects.get(&id) {
            None => Err(SitegenError::ProjectNotFound { id }),
            Some(p) if p.user_id != user.id => Err(SitegenError::Authorization),
            Some(p) => Ok(p.clone()),
        }
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn save(&self, user: &User, name: &str, code: GeneratedSite) -> Result<Project> {
        let project = Project::new(name, code, &user.id);
        self.projects
            .write()
            .unwrap()
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn get(&self, user: &User, id: Uuid) -> Result<Project> {
        self.owned(user, id)
    }

    async fn list(&self, user: &User) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = self
            .projects
            .read()
            .unwrap()
            .values()
            .filter(|p| p.user_id == user.id)
            .cloned()
            .collect();

        // Newest first
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn update(
        &self,
        user: &User,
        id: Uuid,
        code: Option<GeneratedSite>,
        name: Option<String>,
    ) -> Result<Project> {
        // Ownership is checked before anything is touched.
        let mut project = self.owned(user, id)?;

        if let Some(code) = code {
            project.code = code;
        }
        if let Some(name) = name {
            project.name = name;
        }
        project.updated_at = Utc::now();

        self.projects
            .write()
            .unwrap()
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn delete(&self, user: &User, id: Uuid) -> Result<()> {
        self.owned(user, id)?;
        self.projects.write().unwrap().remove(&id);
        Ok(())
    }

    async fn duplicate(&self, user: &User, id: Uuid) -> Result<Project> {
        let original = self.owned(user, id)?;
        let copy = Project::new(
            format!("{} (Copy)", original.name),
            original.code.clone(),
            &user.id,
        );
        self.projects
            .write()
            .unwrap()
            .insert(copy.id, copy.clone());
        Ok(copy)
    }
}
