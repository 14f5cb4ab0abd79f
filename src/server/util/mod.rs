//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers used across repositories and services: field
//! validators built on regular expressions, the idea slug generator, and time window checks
//! for "recently joined" style questions.

pub mod slug;
pub mod time;
pub mod validate;
