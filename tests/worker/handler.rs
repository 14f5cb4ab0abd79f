//! Tests for WorkerJobHandler.
//!
//! This module verifies that SendEmail jobs reach the mailer and that delivery failures are
//! returned to the queue.

use std::sync::Arc;

use async_trait::async_trait;
use insparty::server::{
    error::{worker::WorkerError, Error},
    model::{email::EmailMessage, worker::WorkerJob},
    worker::{handler::WorkerJobHandler, mailer::Mailer, memory::MemoryMailer},
};

struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &EmailMessage) -> Result<(), WorkerError> {
        Err(WorkerError::Delivery("connection refused".to_string()))
    }
}

fn job() -> WorkerJob {
    WorkerJob::SendEmail {
        email: EmailMessage::new(
            "Welcome to Insparty",
            "Please verify your e-mail address.",
            "noreply@insparty.dev",
            vec!["johndoe@example.com".to_string()],
        ),
    }
}

/// Tests handling a SendEmail job.
///
/// Expected: Ok with the message in the mailer outbox
#[tokio::test]
async fn delivers_email() {
    let mailer = Arc::new(MemoryMailer::new());
    let handler = WorkerJobHandler::new(mailer.clone());

    let result = handler.handle(&job()).await;

    assert!(result.is_ok(), "{:?}", result);
    let outbox = mailer.outbox();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].subject, "Welcome to Insparty");
}

/// Tests handling a job when the mailer fails.
///
/// Expected: Err(Delivery)
#[tokio::test]
async fn returns_delivery_error() {
    let handler = WorkerJobHandler::new(Arc::new(FailingMailer));

    let result = handler.handle(&job()).await;

    assert!(matches!(
        result,
        Err(Error::WorkerError(WorkerError::Delivery(_)))
    ));
}
