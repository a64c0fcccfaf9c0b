use async_trait::async_trait;
use tracing::info;

use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for DeleteProjectError {
    fn from(error: ProjectRepositoryError) -> Self {
        match error {
            ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
            other => DeleteProjectError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: i64) -> Result<(), DeleteProjectError>;
}

#[derive(Clone)]
pub struct DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: i64) -> Result<(), DeleteProjectError> {
        let removed = self.repository.delete(project_id).await?;

        info!(project_id = removed.id, title = %removed.title, "project deleted");

        Ok(())
    }
}
