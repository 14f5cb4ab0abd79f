//! Tests for MemoryQueue running queued jobs.

use std::sync::Arc;

use insparty::server::{
    model::email::EmailMessage,
    service::email::EmailService,
    worker::{
        handler::WorkerJobHandler,
        memory::{MemoryMailer, MemoryQueue},
    },
};

/// Tests running every queued job against a handler.
///
/// Verifies that messages are delivered in the order they were queued and the queue is empty
/// afterwards.
///
/// Expected: Ok(2) with both messages in the outbox
#[tokio::test]
async fn runs_queued_jobs_in_order() {
    let queue = MemoryQueue::new();
    let mailer = Arc::new(MemoryMailer::new());
    let handler = WorkerJobHandler::new(mailer.clone());

    let email_service = EmailService::new(&queue);
    for subject in ["First", "Second"] {
        let email = EmailMessage::new(
            subject,
            "Hello",
            "noreply@insparty.dev",
            vec!["johndoe@example.com".to_string()],
        );
        email_service.send_email(email).await.unwrap();
    }
    assert_eq!(queue.len(), 2);

    let result = queue.run_all(&handler).await;

    assert!(matches!(result, Ok(2)));
    assert!(queue.is_empty());
    let subjects: Vec<String> = mailer.outbox().into_iter().map(|e| e.subject).collect();
    assert_eq!(subjects, vec!["First".to_string(), "Second".to_string()]);
}

/// Tests running an empty queue.
///
/// Expected: Ok(0) without deliveries
#[tokio::test]
async fn runs_nothing_when_empty() {
    let queue = MemoryQueue::new();
    let mailer = Arc::new(MemoryMailer::new());

    let result = queue.run_all(&WorkerJobHandler::new(mailer.clone())).await;

    assert!(matches!(result, Ok(0)));
    assert!(mailer.outbox().is_empty());
}
