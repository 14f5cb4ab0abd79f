use std::sync::Arc;

use insparty::server::{config::Config, error::Error, startup, worker::mailer::LogMailer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let _db = startup::connect_to_database(&config).await?;
    let _storage = startup::start_workers(&config, Arc::new(LogMailer)).await?;

    tracing::info!(
        "Started {} e-mail workers, sending as {}",
        config.workers,
        config.email_host_user
    );

    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutting down");

    Ok(())
}
