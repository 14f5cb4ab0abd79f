//! Database and worker setup run once at process start.

use std::sync::Arc;

use apalis_redis::RedisStorage;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    model::worker::WorkerJob,
    worker::{handle_job, handler::WorkerJobHandler, mailer::Mailer},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await.map_err(|e| {
        tracing::error!("Failed to connect to database: {:?}", e);
        e
    })?;

    Migrator::up(&db, None).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {:?}", e);
        e
    })?;

    Ok(db)
}

/// Connect to Valkey/Redis and spawn the e-mail workers
///
/// Returns the job storage services push jobs to.
pub async fn start_workers(
    config: &Config,
    mailer: Arc<dyn Mailer>,
) -> Result<RedisStorage<WorkerJob>, Error> {
    use apalis::prelude::*;

    let conn = apalis_redis::connect(config.valkey_url.to_string()).await?;
    let storage = RedisStorage::new(conn);
    let workers = config.workers;
    let handler = WorkerJobHandler::new(mailer);

    let storage_clone = storage.clone();

    let _ = tokio::spawn(async move {
        WorkerBuilder::new("insparty-worker")
            .concurrency(workers)
            .data(handler)
            .backend(storage_clone)
            .build_fn(handle_job)
            .run()
            .await;
    });

    Ok(storage)
}
