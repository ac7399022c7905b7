//! Test utilities for the catalog server.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, and `build()` returns a [`TestContext`] backed by an in-memory SQLite database with
//! fixture helpers for inserting further records during the test.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use fixtures::factory;

pub mod prelude {
    pub use crate::{factory, TestBuilder, TestContext, TestError};
}
