//! Shared test infrastructure.

mod helpers;

pub(crate) use context::TestContext;
