use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::project::application::ports::outgoing::{
    CreateProjectData, ImageStore, ProjectRepository,
};
use crate::project::domain::entities::Project;
use crate::project::domain::upload_policy::{UploadPolicy, UploadPolicyError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Raw image bytes as received from the multipart form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    title: String,
    description: String,
    technologies: Vec<String>,
    github_link: Option<String>,
    live_link: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Description cannot be empty")]
    EmptyDescription,
}

/// The dashboard submits technologies as one comma-separated form field.
pub fn parse_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tech| tech.trim().to_string())
        .filter(|tech| !tech.is_empty())
        .collect()
}

impl CreateProjectCommand {
    pub fn new(
        title: String,
        description: String,
        technologies: &str,
        github_link: Option<String>,
        live_link: Option<String>,
    ) -> Result<Self, ProjectCommandError> {
        let title = title.trim();

        if title.is_empty() {
            return Err(ProjectCommandError::EmptyTitle);
        }

        if title.len() > 200 {
            return Err(ProjectCommandError::TitleTooLong);
        }

        if description.trim().is_empty() {
            return Err(ProjectCommandError::EmptyDescription);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
            technologies: parse_technologies(technologies),
            github_link: github_link.filter(|link| !link.trim().is_empty()),
            live_link: live_link.filter(|link| !link.trim().is_empty()),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn github_link(&self) -> Option<&String> {
        self.github_link.as_ref()
    }

    pub fn live_link(&self) -> Option<&String> {
        self.live_link.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Image rejected: {0}")]
    RejectedImage(UploadPolicyError),

    #[error("Image store error: {0}")]
    ImageStoreFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateProjectCommand,
        image: Option<ImageUpload>,
    ) -> Result<Project, CreateProjectError>;
}

pub struct CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
    image_store: Arc<dyn ImageStore + Send + Sync>,
    upload_policy: UploadPolicy,
}

impl<R> CreateProjectService<R>
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
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateProjectCommand,
        image: Option<ImageUpload>,
    ) -> Result<Project, CreateProjectError> {
        let image_url = match image {
            Some(upload) => {
                let extension = self
                    .upload_policy
                    .check(&upload.content_type, upload.bytes.len() as u64)
                    .map_err(CreateProjectError::RejectedImage)?;

                let url = self
                    .image_store
                    .save(upload.bytes, extension)
                    .await
                    .map_err(|e| CreateProjectError::ImageStoreFailed(e.to_string()))?;

                Some(url)
            }
            None => None,
        };

        let data = CreateProjectData {
            title: command.title().to_string(),
            description: command.description().to_string(),
            technologies: command.technologies().to_vec(),
            image: image_url,
            github_link: command.github_link().cloned(),
            live_link: command.live_link().cloned(),
        };

        let project = self
            .repository
            .create(data)
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))?;

        info!(project_id = project.id, title = %project.title, "project created");

        Ok(project)
    }
}
