//! Use cases - request orchestration.
//!
//! Each module turns one family of external calls into port operations.
//! Identifier validation always runs before any lookup, and existence checks
//! always run before membership state checks.

pub mod creature;
pub mod crud;
pub mod membership;
pub mod realm;

use mythos_domain::{DomainError, Entity};

use crate::infrastructure::ports::RepoError;

pub use creature::{CreatureCrud, CreatureWithRealms};
pub use membership::MembershipUseCases;
pub use realm::{RealmCrud, RealmWithCreatures};

/// Shared error type for CRUD and membership use cases.
#[derive(Debug, thiserror::Error)]
pub enum CrudError {
    /// Caller-supplied identifier is not a well-formed UUID.
    #[error("Invalid UUID format")]
    InvalidIdentifier(String),
    #[error("{entity_type} not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Membership already exists")]
    DuplicateMembership,
    #[error("Membership not found")]
    MembershipNotFound,
    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl CrudError {
    pub fn not_found<T: Entity>(id: T::Id) -> Self {
        Self::NotFound {
            entity_type: T::KIND,
            id: id.to_string(),
        }
    }
}

impl From<RepoError> for CrudError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            other => Self::Repo(other),
        }
    }
}

impl From<DomainError> for CrudError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidId(raw) => Self::InvalidIdentifier(raw),
            DomainError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
        }
    }
}
