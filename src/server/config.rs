//! Runtime configuration read from environment variables.

use crate::server::error::config::ConfigError;

/// Default concurrency of the e-mail worker.
pub const DEFAULT_WORKERS: usize = 4;
/// Default maximum number of ideas per founder.
pub const DEFAULT_FOUNDER_IDEAS_LIMIT: u64 = 3;

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Connection string of the relational database.
    pub database_url: String,
    /// URL of the Valkey/Redis server holding the job queue.
    pub valkey_url: String,
    /// Sender address of outbound e-mail.
    pub email_host_user: String,
    /// Concurrency of the e-mail worker.
    pub workers: usize,
    /// Maximum number of ideas a single founder may own.
    pub founder_ideas_limit: u64,
}

impl Config {
    /// Builds the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from `lookup`, which returns the value of an environment variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            email_host_user: required("EMAIL_HOST_USER")?,
            workers: parse_or(&lookup, "WORKERS", DEFAULT_WORKERS)?,
            founder_ideas_limit: parse_or(&lookup, "FOUNDER_IDEAS_LIMIT", DEFAULT_FOUNDER_IDEAS_LIMIT)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("{:?} is not a valid number: {}", value, e),
            }),
    }
}
