pub mod skill_repository_json;

pub use skill_repository_json::SkillRepositoryJson;
