//! SMTP implementation of the EmailService trait using lettre.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::error;

use estate_core::errors::DomainError;
use estate_core::services::email::{EmailMessage, EmailService};
use estate_shared::config::EmailConfig;

/// Sends mail through an authenticated SMTP relay
pub struct SmtpEmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailService {
    /// Create a new SMTP email service from configuration
    pub fn new(config: &EmailConfig) -> Result<Self, DomainError> {
        let credentials =
            Credentials::new(config.smtp_user.clone(), config.smtp_password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| DomainError::internal(format!("Invalid SMTP relay: {}", e)))?
            .credentials(credentials)
            .build();

        let from = config
            .from_address
            .parse()
            .map_err(|e| DomainError::internal(format!("Invalid from address: {}", e)))?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError> {
        let EmailMessage {
            to,
            reply_to,
            subject,
            body,
        } = message;

        let to: Mailbox = to
            .parse()
            .map_err(|e| DomainError::internal(format!("Invalid recipient address: {}", e)))?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject);

        if let Some(reply_to) = reply_to {
            let mailbox: Mailbox = reply_to
                .parse()
                .map_err(|e| DomainError::internal(format!("Invalid reply-to address: {}", e)))?;
            builder = builder.reply_to(mailbox);
        }

        let email = builder
            .body(body)
            .map_err(|e| DomainError::internal(format!("Failed to build email: {}", e)))?;

        self.transport.send(email).await.map_err(|e| {
            // keep relay details out of the caller-facing message
            error!(error = %e, "email delivery failed");
            DomainError::internal("Failed to send email.")
        })?;

        Ok(())
    }
}
