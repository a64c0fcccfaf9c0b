use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::project::application::ports::outgoing::{
    ImageStore, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};
use crate::project::application::use_cases::create_project::{
    parse_technologies, ImageUpload, ProjectCommandError,
};
use crate::project::domain::entities::Project;
use crate::project::domain::upload_policy::{UploadPolicy, UploadPolicyError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectCommand {
    title: Option<String>,
    description: Option<String>,
    technologies: Option<Vec<String>>,
    github_link: Option<String>,
    live_link: Option<String>,
}

impl UpdateProjectCommand {
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        technologies: Option<String>,
        github_link: Option<String>,
        live_link: Option<String>,
    ) -> Result<Self, ProjectCommandError> {
        let title = match title {
            Some(title) => {
                let title = title.trim().to_string();
                if title.is_empty() {
                    return Err(ProjectCommandError::EmptyTitle);
                }
                if title.len() > 200 {
                    return Err(ProjectCommandError::TitleTooLong);
                }
                Some(title)
            }
            None => None,
        };

        let description = match description {
            Some(description) => {
                let description = description.trim().to_string();
                if description.is_empty() {
                    return Err(ProjectCommandError::EmptyDescription);
                }
                Some(description)
            }
            None => None,
        };

        Ok(Self {
            title,
            description,
            technologies: technologies.map(|raw| parse_technologies(&raw)),
            github_link,
            live_link,
        })
    }

    pub fn into_data(self, image: Option<String>) -> UpdateProjectData {
        UpdateProjectData {
            title: self.title,
            description: self.description,
            technologies: self.technologies,
            image,
            github_link: self.github_link,
            live_link: self.live_link,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Image rejected: {0}")]
    RejectedImage(UploadPolicyError),

    #[error("Image store error: {0}")]
    ImageStoreFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for UpdateProjectError {
    fn from(error: ProjectRepositoryError) -> Self {
        match error {
            ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
            other => UpdateProjectError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: i64,
        command: UpdateProjectCommand,
        image: Option<ImageUpload>,
    ) -> Result<Project, UpdateProjectError>;
}

pub struct UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
    image_store: Arc<dyn ImageStore + Send + Sync>,
    upload_policy: UploadPolicy,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R, image_store: Arc<dyn ImageStore + Send + Sync>) -> Self {
        Self {
            repository,
            image_store,
            upload_policy: UploadPolicy::new(),
        }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: i64,
        command: UpdateProjectCommand,
        image: Option<ImageUpload>,
    ) -> Result<Project, UpdateProjectError> {
        let existing = self
            .repository
            .get_by_id(project_id)
            .await?
            .ok_or(UpdateProjectError::NotFound)?;

        let new_image_url = match image {
            Some(upload) => {
                let extension = self
                    .upload_policy
                    .check(&upload.content_type, upload.bytes.len() as u64)
                    .map_err(UpdateProjectError::RejectedImage)?;

                let url = self
                    .image_store
                    .save(upload.bytes, extension)
                    .await
                    .map_err(|e| UpdateProjectError::ImageStoreFailed(e.to_string()))?;

                Some(url)
            }
            None => None,
        };

        let replacing_image = new_image_url.is_some();
        let updated = self
            .repository
            .update(project_id, command.into_data(new_image_url))
            .await?;

        // The replaced file is dead weight; losing the delete is not.
        if replacing_image {
            if let Some(old_url) = existing.image {
                if let Err(error) = self.image_store.delete(&old_url).await {
                    warn!(%error, image = %old_url, "failed to remove replaced project image");
                }
            }
        }

        Ok(updated)
    }
}
