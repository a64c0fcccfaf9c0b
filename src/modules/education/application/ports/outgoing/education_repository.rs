use async_trait::async_trait;

use crate::education::domain::entities::EducationEntry;

#[derive(Debug, Clone)]
pub struct CreateEducationData {
    pub year: i32,
    pub title: String,
    pub institution: String,
    pub highlights: Vec<String>,
    pub skills: Vec<String>,
}

/// `Some` replaces, `None` keeps.
#[derive(Debug, Clone, Default)]
pub struct UpdateEducationData {
    pub year: Option<i32>,
    pub title: Option<String>,
    pub institution: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationRepositoryError {
    #[error("Education entry not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    /// Sorted by year, newest first.
    async fn list(&self) -> Result<Vec<EducationEntry>, EducationRepositoryError>;

    async fn get_by_id(
        &self,
        entry_id: i64,
    ) -> Result<Option<EducationEntry>, EducationRepositoryError>;

    async fn create(
        &self,
        data: CreateEducationData,
    ) -> Result<EducationEntry, EducationRepositoryError>;

    async fn update(
        &self,
        entry_id: i64,
        data: UpdateEducationData,
    ) -> Result<EducationEntry, EducationRepositoryError>;

    async fn delete(&self, entry_id: i64) -> Result<(), EducationRepositoryError>;
}
