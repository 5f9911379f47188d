//! Mythos Engine library.
//!
//! HTTP API and SQLite persistence for the Mythical Creatures service.
//!
//! ## Structure
//!
//! - `use_cases/` - Request orchestration: id validation, lookups, memberships
//! - `infrastructure/` - Port traits, SQLite adapters, configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures shared by unit and end-to-end tests.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end HTTP tests over an in-memory store.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
