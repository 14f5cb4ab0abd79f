//! Server models and type definitions.
//!
//! This module contains the inputs accepted by services, database model type aliases, role and
//! taxonomy views, and worker job definitions. These models sit between the `entity` crate,
//! the services and the background email worker.

pub mod account;
pub mod db;
pub mod email;
pub mod idea;
pub mod role;
pub mod techstack;
pub mod worker;
