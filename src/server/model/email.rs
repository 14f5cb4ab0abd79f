//! Outbound e-mail message.

use serde::{Deserialize, Serialize};

/// E-mail handed to the worker for delivery.
///
/// Serialized to JSON as part of [`WorkerJob`](crate::server::model::worker::WorkerJob) when it
/// is pushed to the job queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Subject line, must not contain line breaks.
    pub subject: String,
    /// Plain text body.
    pub message: String,
    /// Sender address.
    pub from_email: String,
    /// Recipient addresses, at least one.
    pub recipient_list: Vec<String>,
}

impl EmailMessage {
    /// Creates a message.
    pub fn new(
        subject: impl Into<String>,
        message: impl Into<String>,
        from_email: impl Into<String>,
        recipient_list: Vec<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            from_email: from_email.into(),
            recipient_list,
        }
    }
}
