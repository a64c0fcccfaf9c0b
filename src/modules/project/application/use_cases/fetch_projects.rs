use async_trait::async_trait;

use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};
use crate::project::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// List
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProjectsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, FetchProjectsError>;
}

//
// ──────────────────────────────────────────────────────────
// Single
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProjectByIdUseCase: Send + Sync {
    async fn execute(&self, project_id: i64) -> Result<Project, GetProjectError>;
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct FetchProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> FetchProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProjectsUseCase for FetchProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, FetchProjectsError> {
        self.repository
            .list()
            .await
            .map_err(|e| FetchProjectsError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> GetProjectByIdUseCase for FetchProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: i64) -> Result<Project, GetProjectError> {
        let project = self
            .repository
            .get_by_id(project_id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => GetProjectError::NotFound,
                other => GetProjectError::RepositoryError(other.to_string()),
            })?;

        project.ok_or(GetProjectError::NotFound)
    }
}
