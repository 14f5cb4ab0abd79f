//! Tests against a live Redis at `redis://127.0.0.1:6379`.

use apalis::prelude::Storage;
use apalis_redis::RedisStorage;
use insparty::server::{
    model::{email::EmailMessage, worker::WorkerJob},
    service::email::EmailService,
};

/// Tests pushing a SendEmail job to the Redis storage.
///
/// Expected: Ok with one more pending job in the storage
#[tokio::test]
async fn enqueues_job_in_redis() {
    let conn = apalis_redis::connect("redis://127.0.0.1:6379")
        .await
        .expect("Redis should be running");
    let mut storage: RedisStorage<WorkerJob> = RedisStorage::new(conn);
    let before = storage.len().await.expect("Failed to read queue length");

    let email = EmailMessage::new(
        "Welcome to Insparty",
        "Please verify your e-mail address.",
        "noreply@insparty.dev",
        vec!["johndoe@example.com".to_string()],
    );
    let result = EmailService::new(&storage).send_email(email).await;

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(storage.len().await.expect("Failed to read queue length"), before + 1);
}
