//! Infrastructure implementations.
//!
//! Port traits and their SQLite adapters, plus process configuration.

pub mod config;
pub mod ports;
pub mod sqlite;
