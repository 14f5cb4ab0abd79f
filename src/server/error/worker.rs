//! Email worker error types.
//!
//! Errors raised while enqueueing or delivering email jobs. Delivery errors are returned to the
//! job queue, which records the failed attempt.

use thiserror::Error;

/// Errors of the background e-mail worker.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Email header contains a line break, which would allow header injection.
    #[error("Header values can't contain newlines (got {value:?} for header {header:?})")]
    BadHeader {
        /// Name of the header.
        header: &'static str,
        /// Rejected header value.
        value: String,
    },

    /// Failed to push a job onto the queue.
    #[error("Failed to enqueue job: {0}")]
    Enqueue(String),

    /// The mailer failed to hand the message over.
    #[error("Failed to deliver email: {0}")]
    Delivery(String),
}
