use async_trait::async_trait;
use serde::Serialize;

use crate::message::application::ports::outgoing::{MessageRepository, MessageRepositoryError};
use crate::message::domain::entities::Message;

#[derive(Debug, Clone, thiserror::Error)]
pub enum InboxError {
    #[error("Message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<MessageRepositoryError> for InboxError {
    fn from(error: MessageRepositoryError) -> Self {
        match error {
            MessageRepositoryError::NotFound => InboxError::NotFound,
            other => InboxError::RepositoryError(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnreadCount {
    pub count: usize,
}

#[async_trait]
pub trait GetMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Message>, InboxError>;
}

#[async_trait]
pub trait GetMessageByIdUseCase: Send + Sync {
    async fn execute(&self, message_id: i64) -> Result<Message, InboxError>;
}

#[async_trait]
pub trait MarkMessageReadUseCase: Send + Sync {
    async fn execute(&self, message_id: i64) -> Result<Message, InboxError>;
}

#[async_trait]
pub trait DeleteMessageUseCase: Send + Sync {
    async fn execute(&self, message_id: i64) -> Result<(), InboxError>;
}

#[async_trait]
pub trait UnreadCountUseCase: Send + Sync {
    async fn execute(&self) -> Result<UnreadCount, InboxError>;
}

#[derive(Clone)]
pub struct InboxService<R>
where
    R: MessageRepository + Send + Sync,
{
    repository: R,
}

impl<R> InboxService<R>
where
    R: MessageRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetMessagesUseCase for InboxService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Message>, InboxError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> GetMessageByIdUseCase for InboxService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, message_id: i64) -> Result<Message, InboxError> {
        self.repository
            .get_by_id(message_id)
            .await?
            .ok_or(InboxError::NotFound)
    }
}

#[async_trait]
impl<R> MarkMessageReadUseCase for InboxService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, message_id: i64) -> Result<Message, InboxError> {
        Ok(self.repository.mark_read(message_id).await?)
    }
}

#[async_trait]
impl<R> DeleteMessageUseCase for InboxService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, message_id: i64) -> Result<(), InboxError> {
        Ok(self.repository.delete(message_id).await?)
    }
}

#[async_trait]
impl<R> UnreadCountUseCase for InboxService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self) -> Result<UnreadCount, InboxError> {
        let count = self.repository.unread_count().await?;

        Ok(UnreadCount { count })
    }
}
