use async_trait::async_trait;

use crate::auth::application::domain::entities::UserSettings;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateSettingsCommand {
    theme: String,
    cursor: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsCommandError {
    #[error("Theme cannot be empty")]
    EmptyTheme,

    #[error("Cursor style cannot be empty")]
    EmptyCursor,
}

impl UpdateSettingsCommand {
    pub fn new(theme: String, cursor: String) -> Result<Self, SettingsCommandError> {
        let theme = theme.trim();
        let cursor = cursor.trim();

        if theme.is_empty() {
            return Err(SettingsCommandError::EmptyTheme);
        }

        if cursor.is_empty() {
            return Err(SettingsCommandError::EmptyCursor);
        }

        Ok(Self {
            theme: theme.to_string(),
            cursor: cursor.to_string(),
        })
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn cursor(&self) -> &str {
        &self.cursor
    }
}

#[derive(Debug, Clone)]
pub struct UpdateThemeCommand {
    theme: String,
}

impl UpdateThemeCommand {
    pub fn new(theme: String) -> Result<Self, SettingsCommandError> {
        let theme = theme.trim();

        if theme.is_empty() {
            return Err(SettingsCommandError::EmptyTheme);
        }

        Ok(Self {
            theme: theme.to_string(),
        })
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Cases
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for SettingsError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::NotFound => SettingsError::UserNotFound,
            other => SettingsError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IFetchSettingsUseCase: Send + Sync {
    async fn execute(&self, user_id: i64) -> Result<UserSettings, SettingsError>;
}

#[async_trait]
pub trait IUpdateSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: i64,
        command: UpdateSettingsCommand,
    ) -> Result<UserSettings, SettingsError>;
}

#[async_trait]
pub trait IUpdateThemeUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: i64,
        command: UpdateThemeCommand,
    ) -> Result<UserSettings, SettingsError>;
}

/// One service covers the three settings operations; they share the
/// repository and differ only in what they touch.
#[derive(Clone)]
pub struct UserSettingsService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UserSettingsService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchSettingsUseCase for UserSettingsService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: i64) -> Result<UserSettings, SettingsError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or(SettingsError::UserNotFound)?;

        Ok(user.settings)
    }
}

#[async_trait]
impl<R> IUpdateSettingsUseCase for UserSettingsService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: i64,
        command: UpdateSettingsCommand,
    ) -> Result<UserSettings, SettingsError> {
        let settings = UserSettings {
            theme: command.theme().to_string(),
            cursor: command.cursor().to_string(),
        };

        Ok(self.repository.update_settings(user_id, settings).await?)
    }
}

#[async_trait]
impl<R> IUpdateThemeUseCase for UserSettingsService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: i64,
        command: UpdateThemeCommand,
    ) -> Result<UserSettings, SettingsError> {
        Ok(self
            .repository
            .update_theme(user_id, command.theme().to_string())
            .await?)
    }
}
