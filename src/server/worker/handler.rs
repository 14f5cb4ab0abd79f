//! Worker job dispatch.

use std::sync::Arc;

use crate::server::{
    error::Error,
    model::{email::EmailMessage, worker::WorkerJob},
    worker::mailer::Mailer,
};

/// Handler for processing worker jobs from the queue
///
/// This handler provides a centralized interface for executing the different types of worker
/// jobs. Each job type has a corresponding method that handles the specific work.
#[derive(Clone)]
pub struct WorkerJobHandler {
    mailer: Arc<dyn Mailer>,
}

impl WorkerJobHandler {
    /// Create a new WorkerJobHandler delivering e-mail through `mailer`
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Handle a worker job by delegating to the appropriate handler method
    pub async fn handle(&self, job: &WorkerJob) -> Result<(), Error> {
        tracing::debug!("Processing job {}", job);

        match job {
            WorkerJob::SendEmail { email } => self.send_email(email).await,
        }
    }

    /// Hands an e-mail message to the mailer.
    pub async fn send_email(&self, email: &EmailMessage) -> Result<(), Error> {
        self.mailer.send(email).await.map_err(|e| {
            tracing::error!(
                "Failed to send e-mail {:?} to {} recipients: {:?}",
                email.subject,
                email.recipient_list.len(),
                e
            );
            e
        })?;

        tracing::debug!(
            "Successfully sent e-mail {:?} to {} recipients",
            email.subject,
            email.recipient_list.len()
        );

        Ok(())
    }
}
