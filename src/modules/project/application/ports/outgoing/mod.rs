pub mod image_store;
pub mod project_repository;

pub use image_store::{ImageStore, ImageStoreError};
pub use project_repository::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};
