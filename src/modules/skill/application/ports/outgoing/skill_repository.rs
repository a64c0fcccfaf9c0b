use async_trait::async_trait;

use crate::skill::domain::entities::Skill;

#[derive(Debug, Clone)]
pub struct CreateSkillData {
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
    pub level: i32,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// `Some` replaces, `None` keeps.
#[derive(Debug, Clone, Default)]
pub struct UpdateSkillData {
    pub name: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub level: Option<i32>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Skill>, SkillRepositoryError>;

    async fn get_by_id(&self, skill_id: i64) -> Result<Option<Skill>, SkillRepositoryError>;

    async fn create(&self, data: CreateSkillData) -> Result<Skill, SkillRepositoryError>;

    async fn update(
        &self,
        skill_id: i64,
        data: UpdateSkillData,
    ) -> Result<Skill, SkillRepositoryError>;

    async fn delete(&self, skill_id: i64) -> Result<(), SkillRepositoryError>;
}
