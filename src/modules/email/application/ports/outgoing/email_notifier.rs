use async_trait::async_trait;

/// Payload for the owner's copy of a contact-form submission.
#[derive(Debug, Clone)]
pub struct NewMessageNotification {
    pub sender_name: String,
    pub sender_email: String,
    pub company: Option<String>,
    pub project_type: Option<String>,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait]
pub trait EmailNotifier: Send + Sync {
    /// Forward a copy of a new contact message to the site owner's inbox.
    async fn notify_new_message(
        &self,
        notification: NewMessageNotification,
    ) -> Result<(), EmailNotificationError>;

    /// Send a password-reset link to the given address.
    async fn send_password_reset(
        &self,
        to: &str,
        reset_link: &str,
    ) -> Result<(), EmailNotificationError>;
}
