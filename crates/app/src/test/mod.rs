//! Shared fixtures for database-backed tests.

pub(crate) mod helpers;

pub(crate) use context::TestContext;
