use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, UserRepository};
use crate::auth::application::services::hash::hash_token;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    token: String,
    new_password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordCommandError {
    #[error("Token cannot be empty")]
    EmptyToken,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl ResetPasswordCommand {
    pub fn new(token: String, new_password: String) -> Result<Self, ResetPasswordCommandError> {
        let token = token.trim();

        if token.is_empty() {
            return Err(ResetPasswordCommandError::EmptyToken);
        }

        if new_password.trim().is_empty() {
            return Err(ResetPasswordCommandError::EmptyPassword);
        }

        Ok(Self {
            token: token.to_string(),
            new_password,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Invalid reset token")]
    InvalidToken,

    #[error("Reset token has expired")]
    ExpiredToken,

    #[error("Password rejected: {0}")]
    WeakPassword(PasswordPolicyError),

    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError>;
}

pub struct ResetPasswordUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<R> ResetPasswordUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<R> IResetPasswordUseCase for ResetPasswordUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        self.password_policy
            .validate(command.new_password())
            .map_err(ResetPasswordError::WeakPassword)?;

        let user = self
            .repository
            .find_by_reset_token(&hash_token(command.token()))
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ResetPasswordError::InvalidToken)?;

        if !user.reset_token_valid_at(Utc::now()) {
            return Err(ResetPasswordError::ExpiredToken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(command.new_password())
            .map_err(|e| ResetPasswordError::HashFailed(e.to_string()))?;

        self.repository
            .update_password(user.id, password_hash)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))
    }
}
