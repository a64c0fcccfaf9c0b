use async_trait::async_trait;

use crate::message::domain::entities::Message;

#[derive(Debug, Clone)]
pub struct CreateMessageData {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Message>, MessageRepositoryError>;

    async fn get_by_id(&self, message_id: i64) -> Result<Option<Message>, MessageRepositoryError>;

    /// Appends with `read: false`.
    async fn create(&self, data: CreateMessageData) -> Result<Message, MessageRepositoryError>;

    async fn mark_read(&self, message_id: i64) -> Result<Message, MessageRepositoryError>;

    async fn delete(&self, message_id: i64) -> Result<(), MessageRepositoryError>;

    async fn unread_count(&self) -> Result<usize, MessageRepositoryError>;
}
