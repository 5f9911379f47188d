//! Port traits for infrastructure boundaries.
//!
//! Database access is the only abstraction in the engine; everything else is
//! concrete types. Ports exist so the SQLite store can be swapped out and so
//! use cases can be exercised against mocks.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::{EntityRepo, MembershipRepo};

#[cfg(test)]
pub use repos::MockMembershipRepo;
