//! Server application core modules.
//!
//! This module contains the backend of the Insparty platform: configuration, error types,
//! database repositories, the service layer for accounts, roles, ideas and the technology
//! taxonomy, and the background worker delivering e-mail.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
pub mod worker;
