//! Error types for the Insparty server.
//!
//! This module provides the error handling system for the backend with specialized error types
//! for configuration, field validation and the background email worker. All errors use
//! `thiserror` for `Display` and `Error` implementations and convert into the top-level
//! [`Error`] through `?`.

pub mod config;
pub mod validation;
pub mod worker;

use thiserror::Error;

use crate::server::error::{config::ConfigError, validation::ValidationError, worker::WorkerError};

/// Main error type for the Insparty server.
///
/// Aggregates the domain error types and external library errors into a single type so
/// services can propagate any failure with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// One or more fields failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Email worker error (header validation, enqueueing, delivery).
    #[error(transparent)]
    WorkerError(#[from] WorkerError),
    /// A record addressed by ID does not exist.
    #[error("{entity} with ID {id} not found")]
    NotFound {
        /// Kind of record, such as `"Account"`.
        entity: &'static str,
        /// ID that was looked up.
        id: i32,
    },
    /// Internal error indicating a bug in Insparty's code.
    #[error("Internal error, please report this as it indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Redis job storage error (connection, push).
    #[error(transparent)]
    ApalisRedisError(#[from] apalis_redis::RedisError),
    /// I/O error while waiting on process signals.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn account_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Account",
            id,
        }
    }

    pub(crate) fn idea_not_found(id: i32) -> Self {
        Self::NotFound { entity: "Idea", id }
    }

    /// Returns the field errors when this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::ValidationError(err) => Some(err),
            _ => None,
        }
    }
}
