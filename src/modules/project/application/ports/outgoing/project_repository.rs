// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;

use crate::project::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
}

/// Update semantics: a `Some` field replaces the stored value, `None` keeps
/// it. The repository stamps `updated_at`.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub image: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn get_by_id(&self, project_id: i64) -> Result<Option<Project>, ProjectRepositoryError>;

    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError>;

    async fn update(
        &self,
        project_id: i64,
        data: UpdateProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    /// Returns the removed record so callers can clean up its image.
    async fn delete(&self, project_id: i64) -> Result<Project, ProjectRepositoryError>;
}
