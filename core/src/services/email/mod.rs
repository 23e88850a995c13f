//! Outbound email collaborator interface
//!
//! The domain only composes messages; delivery happens behind this trait
//! (SMTP in the infrastructure crate).

use async_trait::async_trait;

use crate::errors::DomainError;

/// A single outbound email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,
    /// Optional reply-to address (used for contact-form relays)
    pub reply_to: Option<String>,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

impl EmailMessage {
    /// Create a plain message with no reply-to
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            reply_to: None,
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Attach a reply-to address
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }
}

/// Trait for sending email through an external relay
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Deliver the message; failures surface as `DomainError::Internal`
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError>;
}
