use std::sync::Arc;

use crate::message::application::use_cases::{
    DeleteMessageUseCase, GetMessageByIdUseCase, GetMessagesUseCase, MarkMessageReadUseCase,
    SubmitMessageUseCase, UnreadCountUseCase,
};

#[derive(Clone)]
pub struct MessageUseCases {
    pub submit: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetMessagesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetMessageByIdUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkMessageReadUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMessageUseCase + Send + Sync>,
    pub unread_count: Arc<dyn UnreadCountUseCase + Send + Sync>,
}
