use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::shared::storage::{next_id, JsonStore, JsonStoreError};
use crate::skill::application::ports::outgoing::{
    CreateSkillData, SkillRepository, SkillRepositoryError, UpdateSkillData,
};
use crate::skill::domain::entities::Skill;

const COLLECTION: &str = "skills";

#[derive(Clone)]
pub struct SkillRepositoryJson {
    store: Arc<JsonStore>,
}

impl SkillRepositoryJson {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

fn map_store_err(error: JsonStoreError) -> SkillRepositoryError {
    SkillRepositoryError::StorageError(error.to_string())
}

#[async_trait]
impl SkillRepository for SkillRepositoryJson {
    async fn list(&self) -> Result<Vec<Skill>, SkillRepositoryError> {
        self.store.read(COLLECTION).await.map_err(map_store_err)
    }

    async fn get_by_id(&self, skill_id: i64) -> Result<Option<Skill>, SkillRepositoryError> {
        let skills: Vec<Skill> = self.store.read(COLLECTION).await.map_err(map_store_err)?;

        Ok(skills.into_iter().find(|skill| skill.id == skill_id))
    }

    async fn create(&self, data: CreateSkillData) -> Result<Skill, SkillRepositoryError> {
        self.store
            .update::<Skill, _, _>(COLLECTION, |skills| {
                let skill = Skill {
                    id: next_id(skills.iter().map(|s| s.id)),
                    name: data.name,
                    category: data.category,
                    icon: data.icon,
                    level: data.level,
                    description: data.description,
                    tags: data.tags,
                    created_at: Utc::now(),
                    updated_at: None,
                };
                skills.push(skill.clone());
                skill
            })
            .await
            .map_err(map_store_err)
    }

    async fn update(
        &self,
        skill_id: i64,
        data: UpdateSkillData,
    ) -> Result<Skill, SkillRepositoryError> {
        self.store
            .update::<Skill, _, _>(COLLECTION, |skills| {
                let skill = skills
                    .iter_mut()
                    .find(|skill| skill.id == skill_id)
                    .ok_or(SkillRepositoryError::NotFound)?;

                if let Some(name) = data.name {
                    skill.name = name;
                }
                if let Some(category) = data.category {
                    skill.category = category;
                }
                if let Some(icon) = data.icon {
                    skill.icon = Some(icon);
                }
                if let Some(level) = data.level {
                    skill.level = level;
                }
                if let Some(description) = data.description {
                    skill.description = Some(description);
                }
                if let Some(tags) = data.tags {
                    skill.tags = tags;
                }
                skill.updated_at = Some(Utc::now());

                Ok(skill.clone())
            })
            .await
            .map_err(map_store_err)?
    }

    async fn delete(&self, skill_id: i64) -> Result<(), SkillRepositoryError> {
        self.store
            .update::<Skill, _, _>(COLLECTION, |skills| {
                let before = skills.len();
                skills.retain(|skill| skill.id != skill_id);

                if skills.len() == before {
                    Err(SkillRepositoryError::NotFound)
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(map_store_err)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> (tempfile::TempDir, SkillRepositoryJson) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Arc::new(JsonStore::new(dir.path()));
        (dir, SkillRepositoryJson::new(store))
    }

    fn rust_skill() -> CreateSkillData {
        CreateSkillData {
            name: "Rust".to_string(),
            category: "Languages".to_string(),
            icon: Some("devicon-rust".to_string()),
            level: 80,
            description: None,
            tags: vec!["systems".to_string()],
        }
    }

    #[tokio::test]
    async fn create_then_list_roundtrips() {
        let (_dir, repo) = repo();

        let created = repo.create(rust_skill()).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].level, 80);
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let (_dir, repo) = repo();
        let created = repo.create(rust_skill()).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateSkillData {
                    level: Some(90),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.level, 90);
        assert_eq!(updated.name, "Rust");
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn delete_unknown_skill_is_not_found() {
        let (_dir, repo) = repo();

        let result = repo.delete(1).await;

        assert!(matches!(result, Err(SkillRepositoryError::NotFound)));
    }
}
