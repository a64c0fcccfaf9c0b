use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::email::application::ports::outgoing::{EmailNotifier, NewMessageNotification};
use crate::message::application::ports::outgoing::{CreateMessageData, MessageRepository};
use crate::message::domain::entities::Message;
use crate::stats::application::ports::outgoing::StatsRepository;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubmitMessageCommand {
    name: String,
    email: String,
    company: Option<String>,
    project_type: Option<String>,
    message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitMessageCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message too long")]
    MessageTooLong,
}

impl SubmitMessageCommand {
    const MAX_MESSAGE_LEN: usize = 5_000;

    pub fn new(
        name: String,
        email: String,
        company: Option<String>,
        project_type: Option<String>,
        message: String,
    ) -> Result<Self, SubmitMessageCommandError> {
        let name = name.trim();
        let email = email.trim().to_lowercase();
        let message = message.trim();

        if name.is_empty() {
            return Err(SubmitMessageCommandError::EmptyName);
        }

        if !email_address::EmailAddress::is_valid(&email) {
            return Err(SubmitMessageCommandError::InvalidEmail);
        }

        if message.is_empty() {
            return Err(SubmitMessageCommandError::EmptyMessage);
        }

        if message.len() > Self::MAX_MESSAGE_LEN {
            return Err(SubmitMessageCommandError::MessageTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            email,
            company: company.filter(|c| !c.trim().is_empty()),
            project_type: project_type.filter(|p| !p.trim().is_empty()),
            message: message.to_string(),
        })
    }

    fn into_data(self) -> CreateMessageData {
        CreateMessageData {
            name: self.name,
            email: self.email,
            company: self.company,
            project_type: self.project_type,
            message: self.message,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    async fn execute(&self, command: SubmitMessageCommand) -> Result<Message, SubmitMessageError>;
}

/// Stores the message, bumps the counter, forwards an email copy. Only the
/// store matters: counter and email failures are logged and swallowed so the
/// visitor still gets their confirmation.
pub struct SubmitMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    repository: R,
    stats: Arc<dyn StatsRepository + Send + Sync>,
    notifier: Arc<dyn EmailNotifier + Send + Sync>,
}

impl<R> SubmitMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        stats: Arc<dyn StatsRepository + Send + Sync>,
        notifier: Arc<dyn EmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            stats,
            notifier,
        }
    }
}

#[async_trait]
impl<R> SubmitMessageUseCase for SubmitMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, command: SubmitMessageCommand) -> Result<Message, SubmitMessageError> {
        let message = self
            .repository
            .create(command.into_data())
            .await
            .map_err(|e| SubmitMessageError::RepositoryError(e.to_string()))?;

        if let Err(error) = self.stats.increment_message_count().await {
            warn!(%error, "message stored but counter bump failed");
        }

        let notification = NewMessageNotification {
            sender_name: message.name.clone(),
            sender_email: message.email.clone(),
            company: message.company.clone(),
            project_type: message.project_type.clone(),
            body: message.message.clone(),
        };

        if let Err(error) = self.notifier.notify_new_message(notification).await {
            warn!(%error, message_id = message.id, "message stored but email copy failed");
        }

        Ok(message)
    }
}
