//! Outbound e-mail.
//!
//! Messages are validated before they are queued; delivery happens later in a worker.

use crate::server::{
    error::{
        validation::{ErrorCode, FieldError, ValidationError},
        worker::WorkerError,
        Error,
    },
    model::{db::AccountModel, email::EmailMessage, worker::WorkerJob},
    util::validate::validate_email,
    worker::JobQueue,
};

/// Subject of the welcome message.
pub const WELCOME_SUBJECT: &str = "Welcome to Insparty";

/// Service for queueing e-mail messages.
pub struct EmailService<'a, Q: JobQueue + ?Sized> {
    queue: &'a Q,
}

impl<'a, Q: JobQueue + ?Sized> EmailService<'a, Q> {
    /// Creates a new instance of EmailService pushing jobs to `queue`.
    pub fn new(queue: &'a Q) -> Self {
        Self { queue }
    }

    /// Validates a message and queues it for delivery.
    ///
    /// Returns as soon as the job is stored, the message is sent by a worker.
    ///
    /// # Returns
    /// - `Ok(())` - Message queued
    /// - `Err(Error::WorkerError)` - Subject contains a line break
    /// - `Err(Error::ValidationError)` - Invalid sender, no recipients or invalid recipients
    pub async fn send_email(&self, email: EmailMessage) -> Result<(), Error> {
        if email.subject.contains(['\n', '\r']) {
            return Err(WorkerError::BadHeader {
                header: "Subject",
                value: email.subject,
            }
            .into());
        }

        let mut errors = ValidationError::new();

        if let Err(mut err) = validate_email(&email.from_email) {
            err.field = "from_email";
            errors.push(err);
        }

        if email.recipient_list.is_empty() {
            errors.push(FieldError::new(
                "recipient_list",
                ErrorCode::Required,
                "At least one recipient is required.",
            ));
        }

        for recipient in &email.recipient_list {
            if validate_email(recipient).is_err() {
                errors.push(FieldError::new(
                    "recipient_list",
                    ErrorCode::Invalid,
                    format!("'{}' is not a valid e-mail address.", recipient),
                ));
            }
        }

        errors.into_result()?;

        let job = WorkerJob::SendEmail { email };
        tracing::debug!("Queueing job {}", job);

        self.queue.enqueue(job).await
    }

    /// Queues the welcome message sent to a freshly registered account.
    pub async fn send_welcome_email(
        &self,
        account: &AccountModel,
        from_email: &str,
    ) -> Result<(), Error> {
        let message = format!(
            "Hi {},\n\nthanks for joining Insparty. Please verify your e-mail address to start \
             sharing ideas and finding projects.",
            account.username
        );

        self.send_email(EmailMessage::new(
            WELCOME_SUBJECT,
            message,
            from_email,
            vec![account.email.clone()],
        ))
        .await
    }
}
