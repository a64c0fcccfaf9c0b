use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::RngCore;
use std::sync::Arc;
use tracing::debug;

use crate::auth::application::ports::outgoing::UserRepository;
use crate::auth::application::services::hash::hash_token;
use crate::email::application::ports::outgoing::EmailNotifier;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RequestPasswordResetCommand {
    email: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestPasswordResetCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,
}

impl RequestPasswordResetCommand {
    pub fn new(email: String) -> Result<Self, RequestPasswordResetCommandError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() {
            return Err(RequestPasswordResetCommandError::EmptyEmail);
        }

        if !email_address::EmailAddress::is_valid(&email) {
            return Err(RequestPasswordResetCommandError::InvalidEmailFormat);
        }

        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Email delivery failed: {0}")]
    EmailFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IRequestPasswordResetUseCase: Send + Sync {
    /// Succeeds whether or not the email matches the admin account; the
    /// response must not reveal which addresses exist.
    async fn execute(
        &self,
        command: RequestPasswordResetCommand,
    ) -> Result<(), RequestPasswordResetError>;
}

pub struct RequestPasswordResetUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    notifier: Arc<dyn EmailNotifier + Send + Sync>,
    reset_link_base: String,
}

impl<R> RequestPasswordResetUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        notifier: Arc<dyn EmailNotifier + Send + Sync>,
        reset_link_base: String,
    ) -> Self {
        Self {
            repository,
            notifier,
            reset_link_base,
        }
    }

    fn generate_token() -> String {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);

        bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
    }
}

#[async_trait]
impl<R> IRequestPasswordResetUseCase for RequestPasswordResetUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RequestPasswordResetCommand,
    ) -> Result<(), RequestPasswordResetError> {
        let user = self
            .repository
            .find_by_email(command.email())
            .await
            .map_err(|e| RequestPasswordResetError::RepositoryError(e.to_string()))?;

        let Some(user) = user else {
            debug!(email = command.email(), "reset requested for unknown email");
            return Ok(());
        };

        let token = Self::generate_token();
        let expires_at = Utc::now() + Duration::hours(1);

        self.repository
            .set_reset_token(user.id, hash_token(&token), expires_at)
            .await
            .map_err(|e| RequestPasswordResetError::RepositoryError(e.to_string()))?;

        let reset_link = format!("{}?token={}", self.reset_link_base, token);

        self.notifier
            .send_password_reset(&user.email, &reset_link)
            .await
            .map_err(|e| RequestPasswordResetError::EmailFailed(e.to_string()))
    }
}
