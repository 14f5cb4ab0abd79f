//! Test utilities for Insparty.
//!
//! Tests are set up in two phases. [`TestBuilder`] declares the tables and fixtures a test
//! needs, and `build()` returns a [`TestContext`] holding an in-memory SQLite database with
//! everything inserted. Fixture helpers on the context insert further records during the test.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
