use async_trait::async_trait;

use crate::skill::application::ports::outgoing::{
    CreateSkillData, SkillRepository, SkillRepositoryError, UpdateSkillData,
};
use crate::skill::domain::entities::Skill;

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Category cannot be empty")]
    EmptyCategory,

    #[error("Level must be between 0 and 100")]
    LevelOutOfRange,
}

fn check_level(level: i32) -> Result<i32, SkillCommandError> {
    if (0..=100).contains(&level) {
        Ok(level)
    } else {
        Err(SkillCommandError::LevelOutOfRange)
    }
}

#[derive(Debug, Clone)]
pub struct CreateSkillCommand {
    name: String,
    category: String,
    icon: Option<String>,
    level: i32,
    description: Option<String>,
    tags: Vec<String>,
}

impl CreateSkillCommand {
    pub fn new(
        name: String,
        category: String,
        icon: Option<String>,
        level: i32,
        description: Option<String>,
        tags: Vec<String>,
    ) -> Result<Self, SkillCommandError> {
        let name = name.trim();
        let category = category.trim();

        if name.is_empty() {
            return Err(SkillCommandError::EmptyName);
        }

        if category.is_empty() {
            return Err(SkillCommandError::EmptyCategory);
        }

        Ok(Self {
            name: name.to_string(),
            category: category.to_string(),
            icon: icon.filter(|icon| !icon.trim().is_empty()),
            level: check_level(level)?,
            description,
            tags: tags
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
        })
    }

    fn into_data(self) -> CreateSkillData {
        CreateSkillData {
            name: self.name,
            category: self.category,
            icon: self.icon,
            level: self.level,
            description: self.description,
            tags: self.tags,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSkillCommand {
    name: Option<String>,
    category: Option<String>,
    icon: Option<String>,
    level: Option<i32>,
    description: Option<String>,
    tags: Option<Vec<String>>,
}

impl UpdateSkillCommand {
    pub fn new(
        name: Option<String>,
        category: Option<String>,
        icon: Option<String>,
        level: Option<i32>,
        description: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Self, SkillCommandError> {
        let name = match name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(SkillCommandError::EmptyName);
                }
                Some(name)
            }
            None => None,
        };

        let category = match category {
            Some(category) => {
                let category = category.trim().to_string();
                if category.is_empty() {
                    return Err(SkillCommandError::EmptyCategory);
                }
                Some(category)
            }
            None => None,
        };

        let level = match level {
            Some(level) => Some(check_level(level)?),
            None => None,
        };

        Ok(Self {
            name,
            category,
            icon,
            level,
            description,
            tags,
        })
    }

    fn into_data(self) -> UpdateSkillData {
        UpdateSkillData {
            name: self.name,
            category: self.category,
            icon: self.icon,
            level: self.level,
            description: self.description,
            tags: self.tags,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Cases
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for SkillError {
    fn from(error: SkillRepositoryError) -> Self {
        match error {
            SkillRepositoryError::NotFound => SkillError::NotFound,
            other => SkillError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Skill>, SkillError>;
}

#[async_trait]
pub trait GetSkillByIdUseCase: Send + Sync {
    async fn execute(&self, skill_id: i64) -> Result<Skill, SkillError>;
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, command: CreateSkillCommand) -> Result<Skill, SkillError>;
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        skill_id: i64,
        command: UpdateSkillCommand,
    ) -> Result<Skill, SkillError>;
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, skill_id: i64) -> Result<(), SkillError>;
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct ManageSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    repository: R,
}

impl<R> ManageSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSkillsUseCase for ManageSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Skill>, SkillError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> GetSkillByIdUseCase for ManageSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, skill_id: i64) -> Result<Skill, SkillError> {
        self.repository
            .get_by_id(skill_id)
            .await?
            .ok_or(SkillError::NotFound)
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for ManageSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, command: CreateSkillCommand) -> Result<Skill, SkillError> {
        Ok(self.repository.create(command.into_data()).await?)
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for ManageSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        skill_id: i64,
        command: UpdateSkillCommand,
    ) -> Result<Skill, SkillError> {
        Ok(self.repository.update(skill_id, command.into_data()).await?)
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for ManageSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, skill_id: i64) -> Result<(), SkillError> {
        Ok(self.repository.delete(skill_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_must_stay_in_range() {
        let below = CreateSkillCommand::new(
            "Rust".to_string(),
            "Languages".to_string(),
            None,
            -1,
            None,
            vec![],
        );
        assert!(matches!(below, Err(SkillCommandError::LevelOutOfRange)));

        let above = CreateSkillCommand::new(
            "Rust".to_string(),
            "Languages".to_string(),
            None,
            101,
            None,
            vec![],
        );
        assert!(matches!(above, Err(SkillCommandError::LevelOutOfRange)));

        let edge = CreateSkillCommand::new(
            "Rust".to_string(),
            "Languages".to_string(),
            None,
            100,
            None,
            vec![],
        );
        assert!(edge.is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = CreateSkillCommand::new(
            "".to_string(),
            "Languages".to_string(),
            None,
            50,
            None,
            vec![],
        );

        assert!(matches!(result, Err(SkillCommandError::EmptyName)));
    }

    #[test]
    fn partial_update_validates_present_level() {
        let result = UpdateSkillCommand::new(None, None, None, Some(250), None, None);

        assert!(matches!(result, Err(SkillCommandError::LevelOutOfRange)));
    }

    #[test]
    fn tags_are_trimmed_and_filtered() {
        let command = CreateSkillCommand::new(
            "Rust".to_string(),
            "Languages".to_string(),
            None,
            80,
            None,
            vec![" systems ".to_string(), " ".to_string()],
        )
        .unwrap();

        assert_eq!(command.into_data().tags, vec!["systems"]);
    }
}
