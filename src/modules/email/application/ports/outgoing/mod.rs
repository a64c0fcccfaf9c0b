pub mod email_notifier;
pub mod email_sender;

pub use email_notifier::{EmailNotificationError, EmailNotifier, NewMessageNotification};
pub use email_sender::EmailSender;
