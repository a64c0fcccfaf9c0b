use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::message::application::ports::outgoing::{
    CreateMessageData, MessageRepository, MessageRepositoryError,
};
use crate::message::domain::entities::Message;
use crate::shared::storage::{next_id, JsonStore, JsonStoreError};

const COLLECTION: &str = "messages";

#[derive(Clone)]
pub struct MessageRepositoryJson {
    store: Arc<JsonStore>,
}

impl MessageRepositoryJson {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

fn map_store_err(error: JsonStoreError) -> MessageRepositoryError {
    MessageRepositoryError::StorageError(error.to_string())
}

#[async_trait]
impl MessageRepository for MessageRepositoryJson {
    async fn list(&self) -> Result<Vec<Message>, MessageRepositoryError> {
        let mut messages: Vec<Message> =
            self.store.read(COLLECTION).await.map_err(map_store_err)?;

        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(messages)
    }

    async fn get_by_id(&self, message_id: i64) -> Result<Option<Message>, MessageRepositoryError> {
        let messages: Vec<Message> = self.store.read(COLLECTION).await.map_err(map_store_err)?;

        Ok(messages.into_iter().find(|message| message.id == message_id))
    }

    async fn create(&self, data: CreateMessageData) -> Result<Message, MessageRepositoryError> {
        self.store
            .update::<Message, _, _>(COLLECTION, |messages| {
                let message = Message {
                    id: next_id(messages.iter().map(|m| m.id)),
                    name: data.name,
                    email: data.email,
                    company: data.company,
                    project_type: data.project_type,
                    message: data.message,
                    read: false,
                    created_at: Utc::now(),
                    read_at: None,
                };
                messages.push(message.clone());
                message
            })
            .await
            .map_err(map_store_err)
    }

    async fn mark_read(&self, message_id: i64) -> Result<Message, MessageRepositoryError> {
        self.store
            .update::<Message, _, _>(COLLECTION, |messages| {
                let message = messages
                    .iter_mut()
                    .find(|message| message.id == message_id)
                    .ok_or(MessageRepositoryError::NotFound)?;

                if !message.read {
                    message.read = true;
                    message.read_at = Some(Utc::now());
                }

                Ok(message.clone())
            })
            .await
            .map_err(map_store_err)?
    }

    async fn delete(&self, message_id: i64) -> Result<(), MessageRepositoryError> {
        self.store
            .update::<Message, _, _>(COLLECTION, |messages| {
                let before = messages.len();
                messages.retain(|message| message.id != message_id);

                if messages.len() == before {
                    Err(MessageRepositoryError::NotFound)
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(map_store_err)?
    }

    async fn unread_count(&self) -> Result<usize, MessageRepositoryError> {
        let messages: Vec<Message> = self.store.read(COLLECTION).await.map_err(map_store_err)?;

        Ok(messages.iter().filter(|message| !message.read).count())
    }
}
