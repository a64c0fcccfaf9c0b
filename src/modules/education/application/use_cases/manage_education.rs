use async_trait::async_trait;

use crate::education::application::ports::outgoing::{
    CreateEducationData, EducationRepository, EducationRepositoryError, UpdateEducationData,
};
use crate::education::domain::entities::EducationEntry;

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Institution cannot be empty")]
    EmptyInstitution,

    #[error("Year out of range")]
    YearOutOfRange,
}

const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1950..=2100;

#[derive(Debug, Clone)]
pub struct CreateEducationCommand {
    year: i32,
    title: String,
    institution: String,
    highlights: Vec<String>,
    skills: Vec<String>,
}

impl CreateEducationCommand {
    pub fn new(
        year: i32,
        title: String,
        institution: String,
        highlights: Vec<String>,
        skills: Vec<String>,
    ) -> Result<Self, EducationCommandError> {
        let title = title.trim();
        let institution = institution.trim();

        if title.is_empty() {
            return Err(EducationCommandError::EmptyTitle);
        }

        if institution.is_empty() {
            return Err(EducationCommandError::EmptyInstitution);
        }

        if !YEAR_RANGE.contains(&year) {
            return Err(EducationCommandError::YearOutOfRange);
        }

        Ok(Self {
            year,
            title: title.to_string(),
            institution: institution.to_string(),
            highlights: clean(highlights),
            skills: clean(skills),
        })
    }

    fn into_data(self) -> CreateEducationData {
        CreateEducationData {
            year: self.year,
            title: self.title,
            institution: self.institution,
            highlights: self.highlights,
            skills: self.skills,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEducationCommand {
    year: Option<i32>,
    title: Option<String>,
    institution: Option<String>,
    highlights: Option<Vec<String>>,
    skills: Option<Vec<String>>,
}

impl UpdateEducationCommand {
    pub fn new(
        year: Option<i32>,
        title: Option<String>,
        institution: Option<String>,
        highlights: Option<Vec<String>>,
        skills: Option<Vec<String>>,
    ) -> Result<Self, EducationCommandError> {
        if let Some(year) = year {
            if !YEAR_RANGE.contains(&year) {
                return Err(EducationCommandError::YearOutOfRange);
            }
        }

        let title = match title {
            Some(title) => {
                let title = title.trim().to_string();
                if title.is_empty() {
                    return Err(EducationCommandError::EmptyTitle);
                }
                Some(title)
            }
            None => None,
        };

        let institution = match institution {
            Some(institution) => {
                let institution = institution.trim().to_string();
                if institution.is_empty() {
                    return Err(EducationCommandError::EmptyInstitution);
                }
                Some(institution)
            }
            None => None,
        };

        Ok(Self {
            year,
            title,
            institution,
            highlights: highlights.map(clean),
            skills: skills.map(clean),
        })
    }

    fn into_data(self) -> UpdateEducationData {
        UpdateEducationData {
            year: self.year,
            title: self.title,
            institution: self.institution,
            highlights: self.highlights,
            skills: self.skills,
        }
    }
}

fn clean(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Use Cases
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationError {
    #[error("Education entry not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<EducationRepositoryError> for EducationError {
    fn from(error: EducationRepositoryError) -> Self {
        match error {
            EducationRepositoryError::NotFound => EducationError::NotFound,
            other => EducationError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EducationEntry>, EducationError>;
}

#[async_trait]
pub trait GetEducationByIdUseCase: Send + Sync {
    async fn execute(&self, entry_id: i64) -> Result<EducationEntry, EducationError>;
}

#[async_trait]
pub trait CreateEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateEducationCommand,
    ) -> Result<EducationEntry, EducationError>;
}

#[async_trait]
pub trait UpdateEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        entry_id: i64,
        command: UpdateEducationCommand,
    ) -> Result<EducationEntry, EducationError>;
}

#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn execute(&self, entry_id: i64) -> Result<(), EducationError>;
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct ManageEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    repository: R,
}

impl<R> ManageEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetEducationUseCase for ManageEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EducationEntry>, EducationError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> GetEducationByIdUseCase for ManageEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, entry_id: i64) -> Result<EducationEntry, EducationError> {
        self.repository
            .get_by_id(entry_id)
            .await?
            .ok_or(EducationError::NotFound)
    }
}

#[async_trait]
impl<R> CreateEducationUseCase for ManageEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateEducationCommand,
    ) -> Result<EducationEntry, EducationError> {
        Ok(self.repository.create(command.into_data()).await?)
    }
}

#[async_trait]
impl<R> UpdateEducationUseCase for ManageEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(
        &self,
        entry_id: i64,
        command: UpdateEducationCommand,
    ) -> Result<EducationEntry, EducationError> {
        Ok(self.repository.update(entry_id, command.into_data()).await?)
    }
}

#[async_trait]
impl<R> DeleteEducationUseCase for ManageEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, entry_id: i64) -> Result<(), EducationError> {
        Ok(self.repository.delete(entry_id).await?)
    }
}
