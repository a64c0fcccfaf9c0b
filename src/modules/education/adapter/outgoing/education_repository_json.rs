use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::education::application::ports::outgoing::{
    CreateEducationData, EducationRepository, EducationRepositoryError, UpdateEducationData,
};
use crate::education::domain::entities::EducationEntry;
use crate::shared::storage::{next_id, JsonStore, JsonStoreError};

const COLLECTION: &str = "education";

#[derive(Clone)]
pub struct EducationRepositoryJson {
    store: Arc<JsonStore>,
}

impl EducationRepositoryJson {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

fn map_store_err(error: JsonStoreError) -> EducationRepositoryError {
    EducationRepositoryError::StorageError(error.to_string())
}

#[async_trait]
impl EducationRepository for EducationRepositoryJson {
    async fn list(&self) -> Result<Vec<EducationEntry>, EducationRepositoryError> {
        let mut entries: Vec<EducationEntry> =
            self.store.read(COLLECTION).await.map_err(map_store_err)?;

        // Timeline renders newest first.
        entries.sort_by(|a, b| b.year.cmp(&a.year));

        Ok(entries)
    }

    async fn get_by_id(
        &self,
        entry_id: i64,
    ) -> Result<Option<EducationEntry>, EducationRepositoryError> {
        let entries: Vec<EducationEntry> =
            self.store.read(COLLECTION).await.map_err(map_store_err)?;

        Ok(entries.into_iter().find(|entry| entry.id == entry_id))
    }

    async fn create(
        &self,
        data: CreateEducationData,
    ) -> Result<EducationEntry, EducationRepositoryError> {
        self.store
            .update::<EducationEntry, _, _>(COLLECTION, |entries| {
                let entry = EducationEntry {
                    id: next_id(entries.iter().map(|e| e.id)),
                    year: data.year,
                    title: data.title,
                    institution: data.institution,
                    highlights: data.highlights,
                    skills: data.skills,
                    created_at: Utc::now(),
                    updated_at: None,
                };
                entries.push(entry.clone());
                entry
            })
            .await
            .map_err(map_store_err)
    }

    async fn update(
        &self,
        entry_id: i64,
        data: UpdateEducationData,
    ) -> Result<EducationEntry, EducationRepositoryError> {
        self.store
            .update::<EducationEntry, _, _>(COLLECTION, |entries| {
                let entry = entries
                    .iter_mut()
                    .find(|entry| entry.id == entry_id)
                    .ok_or(EducationRepositoryError::NotFound)?;

                if let Some(year) = data.year {
                    entry.year = year;
                }
                if let Some(title) = data.title {
                    entry.title = title;
                }
                if let Some(institution) = data.institution {
                    entry.institution = institution;
                }
                if let Some(highlights) = data.highlights {
                    entry.highlights = highlights;
                }
                if let Some(skills) = data.skills {
                    entry.skills = skills;
                }
                entry.updated_at = Some(Utc::now());

                Ok(entry.clone())
            })
            .await
            .map_err(map_store_err)?
    }

    async fn delete(&self, entry_id: i64) -> Result<(), EducationRepositoryError> {
        self.store
            .update::<EducationEntry, _, _>(COLLECTION, |entries| {
                let before = entries.len();
                entries.retain(|entry| entry.id != entry_id);

                if entries.len() == before {
                    Err(EducationRepositoryError::NotFound)
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(map_store_err)?
    }
}
