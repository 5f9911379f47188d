//! End-to-end HTTP tests.
//!
//! Each test builds the full router over its own in-memory SQLite database
//! and drives it with `tower::ServiceExt::oneshot`, so no socket is bound.

mod creature_tests;
mod e2e_helpers;

pub use e2e_helpers::*;
