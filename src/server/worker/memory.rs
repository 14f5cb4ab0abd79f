//! In-process queue and mailer.
//!
//! [`MemoryQueue`] stores jobs until they are drained or run against a handler, and
//! [`MemoryMailer`] keeps delivered messages in an outbox. Both run without Redis or a mail
//! transport.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::server::{
    error::{worker::WorkerError, Error},
    model::{email::EmailMessage, worker::WorkerJob},
    worker::{handler::WorkerJobHandler, mailer::Mailer, JobQueue},
};

// Critical sections are a single push or take, so a poisoned lock never holds partial state.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Job queue held in memory.
#[derive(Debug, Default)]
pub struct MemoryQueue {
    jobs: Mutex<Vec<WorkerJob>>,
}

impl MemoryQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs currently waiting, oldest first.
    pub fn jobs(&self) -> Vec<WorkerJob> {
        lock(&self.jobs).clone()
    }

    /// Number of waiting jobs.
    pub fn len(&self) -> usize {
        lock(&self.jobs).len()
    }

    /// Returns true if no job is waiting.
    pub fn is_empty(&self) -> bool {
        lock(&self.jobs).is_empty()
    }

    /// Removes and returns every waiting job.
    pub fn drain(&self) -> Vec<WorkerJob> {
        std::mem::take(&mut *lock(&self.jobs))
    }

    /// Runs every waiting job with `handler` in order, stopping at the first failure.
    ///
    /// Returns the number of jobs executed successfully. Jobs after a failure are dropped.
    pub async fn run_all(&self, handler: &WorkerJobHandler) -> Result<usize, Error> {
        let jobs = self.drain();
        let mut executed = 0;

        for job in jobs {
            handler.handle(&job).await?;
            executed += 1;
        }

        Ok(executed)
    }
}

#[async_trait]
impl JobQueue for MemoryQueue {
    async fn enqueue(&self, job: WorkerJob) -> Result<(), Error> {
        lock(&self.jobs).push(job);

        Ok(())
    }
}

/// Mailer keeping every delivered message in memory.
#[derive(Debug, Default)]
pub struct MemoryMailer {
    outbox: Mutex<Vec<EmailMessage>>,
}

impl MemoryMailer {
    /// Creates a mailer with an empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered so far, oldest first.
    pub fn outbox(&self) -> Vec<EmailMessage> {
        lock(&self.outbox).clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, email: &EmailMessage) -> Result<(), WorkerError> {
        lock(&self.outbox).push(email.clone());

        Ok(())
    }
}
