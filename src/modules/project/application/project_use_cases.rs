use std::sync::Arc;

use crate::project::application::use_cases::{
    create_project::CreateProjectUseCase,
    delete_project::DeleteProjectUseCase,
    fetch_projects::{GetProjectByIdUseCase, GetProjectsUseCase},
    update_project::UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetProjectByIdUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
}
