//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organized by domain.
//! Each repository is generic over [`sea_orm::ConnectionTrait`] so it runs the same on a
//! connection or inside a transaction.

pub mod account;
pub mod idea;
pub mod role;
pub mod techstack;
