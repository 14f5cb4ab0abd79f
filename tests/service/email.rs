//! Tests for EmailService.
//!
//! This module verifies message validation and enqueueing on the in-memory queue.

use insparty::server::{
    error::{validation::ErrorCode, worker::WorkerError, Error},
    model::{email::EmailMessage, worker::WorkerJob},
    service::email::{EmailService, WELCOME_SUBJECT},
    worker::memory::MemoryQueue,
};
use insparty_test_utils::prelude::*;

fn message() -> EmailMessage {
    EmailMessage::new(
        "Your idea has a new finder",
        "janedoe wants to join Insparty.",
        "noreply@insparty.dev",
        vec!["johndoe@example.com".to_string()],
    )
}

/// Tests sending a valid message.
///
/// Expected: Ok with the message queued unchanged
#[tokio::test]
async fn enqueues_valid_message() {
    let queue = MemoryQueue::new();

    let result = EmailService::new(&queue).send_email(message()).await;

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(
        queue.jobs(),
        vec![WorkerJob::SendEmail { email: message() }]
    );
}

/// Tests a subject containing a line break.
///
/// Expected: Err(BadHeader) and nothing queued
#[tokio::test]
async fn fails_for_subject_with_newline() {
    let queue = MemoryQueue::new();
    let email = EmailMessage {
        subject: "Hello\nBcc: everyone@example.com".to_string(),
        ..message()
    };

    let result = EmailService::new(&queue).send_email(email).await;

    assert!(matches!(
        result,
        Err(Error::WorkerError(WorkerError::BadHeader {
            header: "Subject",
            ..
        }))
    ));
    assert!(queue.is_empty());
}

/// Tests invalid sender and recipient addresses.
///
/// Expected: Err(ValidationError) on from_email and recipient_list
#[tokio::test]
async fn fails_for_invalid_addresses() {
    let queue = MemoryQueue::new();
    let email = EmailMessage {
        from_email: "noreply".to_string(),
        recipient_list: vec!["johndoe@example.com".to_string(), "janedoe".to_string()],
        ..message()
    };

    let result = EmailService::new(&queue).send_email(email).await;

    let Err(Error::ValidationError(errors)) = result else {
        panic!("expected validation error, got {:?}", result);
    };
    assert!(errors.has("from_email", ErrorCode::Invalid));
    assert!(errors.has("recipient_list", ErrorCode::Invalid));
    assert_eq!(errors.errors().len(), 2);
    assert!(queue.is_empty());
}

/// Tests a message without recipients.
///
/// Expected: Err(ValidationError) with a required error on recipient_list
#[tokio::test]
async fn fails_without_recipients() {
    let queue = MemoryQueue::new();
    let email = EmailMessage {
        recipient_list: Vec::new(),
        ..message()
    };

    let result = EmailService::new(&queue).send_email(email).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ref e)) if e.has("recipient_list", ErrorCode::Required)
    ));
}

/// Tests the welcome message for a new account.
///
/// Expected: Ok with a message addressed to the account from the given sender
#[tokio::test]
async fn enqueues_welcome_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let account = test.account().insert_account("johndoe").await?;
    let queue = MemoryQueue::new();

    let result = EmailService::new(&queue)
        .send_welcome_email(&account, "noreply@insparty.dev")
        .await;

    assert!(result.is_ok(), "{:?}", result);
    let jobs = queue.drain();
    assert_eq!(jobs.len(), 1);

    let WorkerJob::SendEmail { email } = &jobs[0];
    assert_eq!(email.subject, WELCOME_SUBJECT);
    assert_eq!(email.from_email, "noreply@insparty.dev");
    assert_eq!(email.recipient_list, vec!["johndoe@example.com".to_string()]);
    assert!(email.message.contains("johndoe"));
    assert!(queue.is_empty());

    Ok(())
}
