//! Background e-mail worker.
//!
//! Services hand jobs to a [`JobQueue`]. In production the queue is the apalis Redis storage
//! consumed by workers started in [`startup::start_workers`](crate::server::startup::start_workers),
//! which run [`handle_job`] for every job. [`memory::MemoryQueue`] keeps jobs in process.

pub mod handler;
pub mod mailer;
pub mod memory;

use apalis::prelude::{Data, Storage};
use apalis_redis::RedisStorage;
use async_trait::async_trait;

use crate::server::{
    error::{worker::WorkerError, Error},
    model::worker::WorkerJob,
    worker::handler::WorkerJobHandler,
};

/// Destination for background jobs.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Pushes a job for later execution, returning once it is stored.
    async fn enqueue(&self, job: WorkerJob) -> Result<(), Error>;
}

#[async_trait]
impl JobQueue for RedisStorage<WorkerJob> {
    async fn enqueue(&self, job: WorkerJob) -> Result<(), Error> {
        let mut storage = self.clone();
        storage.push(job).await.map_err(|e| {
            tracing::error!("Failed to push job to Redis storage: {:?}", e);
            WorkerError::Enqueue(e.to_string())
        })?;

        Ok(())
    }
}

/// Executes a job taken from the Redis storage.
pub async fn handle_job(job: WorkerJob, handler: Data<WorkerJobHandler>) -> Result<(), Error> {
    handler.handle(&job).await
}
