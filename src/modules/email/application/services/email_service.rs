use crate::email::application::ports::outgoing::email_notifier::{
    EmailNotificationError, EmailNotifier, NewMessageNotification,
};
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Builds and dispatches the portfolio's outbound emails: the owner's copy
/// of contact-form submissions and password-reset links.
#[derive(Clone)]
pub struct PortfolioEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    owner_email: String,
}

impl fmt::Debug for PortfolioEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortfolioEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("owner_email", &self.owner_email)
            .finish()
    }
}

impl PortfolioEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, owner_email: String) -> Self {
        Self {
            sender,
            owner_email,
        }
    }

    fn message_body(notification: &NewMessageNotification) -> String {
        let company = notification.company.as_deref().unwrap_or("-");
        let project_type = notification.project_type.as_deref().unwrap_or("-");

        format!(
            "<h2>New portfolio message</h2>\
             <p><strong>From:</strong> {} &lt;{}&gt;</p>\
             <p><strong>Company:</strong> {}</p>\
             <p><strong>Project type:</strong> {}</p>\
             <hr/>\
             <p>{}</p>",
            notification.sender_name,
            notification.sender_email,
            company,
            project_type,
            notification.body,
        )
    }

    fn reset_body(reset_link: &str) -> String {
        format!(
            "<h2>Password reset</h2>\
             <p>A password reset was requested for your portfolio account.</p>\
             <p><a href=\"{link}\">Reset your password</a></p>\
             <p>The link expires in one hour. If you did not request this, \
             ignore this email.</p>",
            link = reset_link,
        )
    }
}

#[async_trait]
impl EmailNotifier for PortfolioEmailService {
    async fn notify_new_message(
        &self,
        notification: NewMessageNotification,
    ) -> Result<(), EmailNotificationError> {
        let subject = format!("New message from {}", notification.sender_name);
        let body = Self::message_body(&notification);

        self.sender
            .send_email(&self.owner_email, &subject, &body)
            .await
            .map_err(EmailNotificationError::EmailSendingFailed)
    }

    async fn send_password_reset(
        &self,
        to: &str,
        reset_link: &str,
    ) -> Result<(), EmailNotificationError> {
        let body = Self::reset_body(reset_link);

        self.sender
            .send_email(to, "Reset your portfolio password", &body)
            .await
            .map_err(EmailNotificationError::EmailSendingFailed)
    }
}
