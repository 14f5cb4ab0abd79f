//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic, validates input and
//! coordinates repositories inside transactions. Services cover account registration and
//! maintenance, role provisioning, ideas, the technology taxonomy and outbound e-mail.

pub mod account;
pub mod email;
pub mod idea;
pub mod role;
pub mod techstack;
