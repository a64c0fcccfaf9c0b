pub mod image_store_fs;
pub mod project_repository_json;

pub use image_store_fs::FsImageStore;
pub use project_repository_json::ProjectRepositoryJson;
