pub mod manage_inbox;
pub mod submit_message;

pub use manage_inbox::{
    DeleteMessageUseCase, GetMessageByIdUseCase, GetMessagesUseCase, InboxError, InboxService,
    MarkMessageReadUseCase, UnreadCountUseCase,
};
pub use submit_message::{
    SubmitMessageCommand, SubmitMessageCommandError, SubmitMessageError, SubmitMessageService,
    SubmitMessageUseCase,
};
