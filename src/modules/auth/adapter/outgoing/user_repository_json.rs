use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserSettings};
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::shared::storage::{JsonStore, JsonStoreError};

const COLLECTION: &str = "users";

#[derive(Clone)]
pub struct UserRepositoryJson {
    store: Arc<JsonStore>,
}

impl UserRepositoryJson {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    async fn find_where<F>(&self, predicate: F) -> Result<Option<User>, UserRepositoryError>
    where
        F: Fn(&User) -> bool,
    {
        let users: Vec<User> = self.store.read(COLLECTION).await.map_err(map_store_err)?;

        Ok(users.into_iter().find(|user| predicate(user)))
    }
}

fn map_store_err(error: JsonStoreError) -> UserRepositoryError {
    UserRepositoryError::StorageError(error.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryJson {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError> {
        self.find_where(|user| user.username == username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let email = email.to_lowercase();
        self.find_where(|user| user.email.to_lowercase() == email)
            .await
    }

    async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, UserRepositoryError> {
        self.find_where(|user| user.id == user_id).await
    }

    async fn first_user(&self) -> Result<Option<User>, UserRepositoryError> {
        let users: Vec<User> = self.store.read(COLLECTION).await.map_err(map_store_err)?;

        Ok(users.into_iter().next())
    }

    async fn insert_if_empty(&self, user: User) -> Result<bool, UserRepositoryError> {
        self.store
            .update::<User, _, _>(COLLECTION, |users| {
                if users.is_empty() {
                    users.push(user);
                    true
                } else {
                    false
                }
            })
            .await
            .map_err(map_store_err)
    }

    async fn set_reset_token(
        &self,
        user_id: i64,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.store
            .update::<User, _, _>(COLLECTION, |users| {
                match users.iter_mut().find(|user| user.id == user_id) {
                    Some(user) => {
                        user.reset_token_hash = Some(token_hash);
                        user.reset_token_expires_at = Some(expires_at);
                        user.updated_at = Utc::now();
                        Ok(())
                    }
                    None => Err(UserRepositoryError::NotFound),
                }
            })
            .await
            .map_err(map_store_err)?
    }

    async fn find_by_reset_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        self.find_where(|user| user.reset_token_hash.as_deref() == Some(token_hash))
            .await
    }

    async fn update_password(
        &self,
        user_id: i64,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.store
            .update::<User, _, _>(COLLECTION, |users| {
                match users.iter_mut().find(|user| user.id == user_id) {
                    Some(user) => {
                        user.password_hash = password_hash;
                        user.reset_token_hash = None;
                        user.reset_token_expires_at = None;
                        user.updated_at = Utc::now();
                        Ok(())
                    }
                    None => Err(UserRepositoryError::NotFound),
                }
            })
            .await
            .map_err(map_store_err)?
    }

    async fn update_settings(
        &self,
        user_id: i64,
        settings: UserSettings,
    ) -> Result<UserSettings, UserRepositoryError> {
        self.store
            .update::<User, _, _>(COLLECTION, |users| {
                match users.iter_mut().find(|user| user.id == user_id) {
                    Some(user) => {
                        user.settings = settings;
                        user.updated_at = Utc::now();
                        Ok(user.settings.clone())
                    }
                    None => Err(UserRepositoryError::NotFound),
                }
            })
            .await
            .map_err(map_store_err)?
    }

    async fn update_theme(
        &self,
        user_id: i64,
        theme: String,
    ) -> Result<UserSettings, UserRepositoryError> {
        self.store
            .update::<User, _, _>(COLLECTION, |users| {
                match users.iter_mut().find(|user| user.id == user_id) {
                    Some(user) => {
                        user.settings.theme = theme;
                        user.updated_at = Utc::now();
                        Ok(user.settings.clone())
                    }
                    None => Err(UserRepositoryError::NotFound),
                }
            })
            .await
            .map_err(map_store_err)?
    }

    async fn update_bio(
        &self,
        user_id: i64,
        bio: Option<String>,
        info: Option<String>,
    ) -> Result<(), UserRepositoryError> {
        self.store
            .update::<User, _, _>(COLLECTION, |users| {
                match users.iter_mut().find(|user| user.id == user_id) {
                    Some(user) => {
                        user.bio = bio;
                        user.info = info;
                        user.updated_at = Utc::now();
                        Ok(())
                    }
                    None => Err(UserRepositoryError::NotFound),
                }
            })
            .await
            .map_err(map_store_err)?
    }
}
