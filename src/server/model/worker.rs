//! Worker job definitions for background task processing.
//!
//! This module defines the `WorkerJob` enum representing all types of background jobs that
//! can be dispatched to the worker queue. Jobs are serialized to JSON for Redis storage and
//! deserialized by the worker handler for processing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::server::model::email::EmailMessage;

/// Background job types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum WorkerJob {
    /// Deliver an e-mail message through the configured mailer.
    SendEmail {
        /// Message to deliver.
        email: EmailMessage,
    },
}

/// Condensed job representation for logging.
///
/// Message bodies are left out so that logs don't carry e-mail content.
impl fmt::Display for WorkerJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerJob::SendEmail { email } => write!(
                f,
                "SendEmail {{ subject: {:?}, recipients: {} }}",
                email.subject,
                email.recipient_list.len()
            ),
        }
    }
}
