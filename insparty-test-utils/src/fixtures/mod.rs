//! Test fixture modules for database records and in-memory models.
//!
//! - `account` - Accounts with their founder and finder records
//! - `idea` - Ideas and finder links
//! - `techstack` - Technology, framework and specialization terms and their links
//! - `factory` - In-memory models that don't touch the database

pub mod account;
pub mod factory;
pub mod idea;
pub mod techstack;
