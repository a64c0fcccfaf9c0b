use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{User, UserSettings};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, UserRepositoryError>;

    /// The site owner: the first (and in practice only) record.
    async fn first_user(&self) -> Result<Option<User>, UserRepositoryError>;

    /// Seed the admin account. Returns false without writing when the
    /// collection already has a user.
    async fn insert_if_empty(&self, user: User) -> Result<bool, UserRepositoryError>;

    async fn set_reset_token(
        &self,
        user_id: i64,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    async fn find_by_reset_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Replace the password hash and clear any outstanding reset token.
    async fn update_password(
        &self,
        user_id: i64,
        password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn update_settings(
        &self,
        user_id: i64,
        settings: UserSettings,
    ) -> Result<UserSettings, UserRepositoryError>;

    async fn update_theme(
        &self,
        user_id: i64,
        theme: String,
    ) -> Result<UserSettings, UserRepositoryError>;

    async fn update_bio(
        &self,
        user_id: i64,
        bio: Option<String>,
        info: Option<String>,
    ) -> Result<(), UserRepositoryError>;
}
