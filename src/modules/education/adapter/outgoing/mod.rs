pub mod education_repository_json;

pub use education_repository_json::EducationRepositoryJson;
