//! E-mail delivery.

use async_trait::async_trait;

use crate::server::{error::worker::WorkerError, model::email::EmailMessage};

/// Hands an e-mail message over to a transport.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers a message.
    async fn send(&self, email: &EmailMessage) -> Result<(), WorkerError>;
}

/// Mailer writing messages to the log, used when no transport is configured.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &EmailMessage) -> Result<(), WorkerError> {
        tracing::info!(
            from = %email.from_email,
            to = ?email.recipient_list,
            subject = %email.subject,
            "{}",
            email.message
        );

        Ok(())
    }
}
