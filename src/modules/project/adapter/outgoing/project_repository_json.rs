use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::project::application::ports::outgoing::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};
use crate::project::domain::entities::Project;
use crate::shared::storage::{next_id, JsonStore, JsonStoreError};

const COLLECTION: &str = "projects";

#[derive(Clone)]
pub struct ProjectRepositoryJson {
    store: Arc<JsonStore>,
}

impl ProjectRepositoryJson {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

fn map_store_err(error: JsonStoreError) -> ProjectRepositoryError {
    ProjectRepositoryError::StorageError(error.to_string())
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryJson {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        self.store.read(COLLECTION).await.map_err(map_store_err)
    }

    async fn get_by_id(&self, project_id: i64) -> Result<Option<Project>, ProjectRepositoryError> {
        let projects: Vec<Project> = self.store.read(COLLECTION).await.map_err(map_store_err)?;

        Ok(projects.into_iter().find(|project| project.id == project_id))
    }

    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError> {
        self.store
            .update::<Project, _, _>(COLLECTION, |projects| {
                let project = Project {
                    id: next_id(projects.iter().map(|p| p.id)),
                    title: data.title,
                    description: data.description,
                    technologies: data.technologies,
                    image: data.image,
                    github_link: data.github_link,
                    live_link: data.live_link,
                    created_at: Utc::now(),
                    updated_at: None,
                };
                projects.push(project.clone());
                project
            })
            .await
            .map_err(map_store_err)
    }

    async fn update(
        &self,
        project_id: i64,
        data: UpdateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        self.store
            .update::<Project, _, _>(COLLECTION, |projects| {
                let project = projects
                    .iter_mut()
                    .find(|project| project.id == project_id)
                    .ok_or(ProjectRepositoryError::NotFound)?;

                if let Some(title) = data.title {
                    project.title = title;
                }
                if let Some(description) = data.description {
                    project.description = description;
                }
                if let Some(technologies) = data.technologies {
                    project.technologies = technologies;
                }
                if let Some(image) = data.image {
                    project.image = Some(image);
                }
                if let Some(github_link) = data.github_link {
                    project.github_link = Some(github_link);
                }
                if let Some(live_link) = data.live_link {
                    project.live_link = Some(live_link);
                }
                project.updated_at = Some(Utc::now());

                Ok(project.clone())
            })
            .await
            .map_err(map_store_err)?
    }

    async fn delete(&self, project_id: i64) -> Result<Project, ProjectRepositoryError> {
        self.store
            .update::<Project, _, _>(COLLECTION, |projects| {
                let position = projects
                    .iter()
                    .position(|project| project.id == project_id)
                    .ok_or(ProjectRepositoryError::NotFound)?;

                Ok(projects.remove(position))
            })
            .await
            .map_err(map_store_err)?
    }
}
