//! Repository port traits for database access.

use std::collections::HashMap;

use async_trait::async_trait;
use mythos_domain::{Creature, CreatureId, Entity, Membership, Page, Realm, RealmId};

use super::error::RepoError;

// =============================================================================
// Entity Storage (one instantiation per entity type)
// =============================================================================

/// Persistence for a single entity table.
///
/// Implemented once per concrete entity (`EntityRepo<Creature>`,
/// `EntityRepo<Realm>`); the generic lookup helpers in `use_cases::crud` are
/// written against this trait.
#[async_trait]
pub trait EntityRepo<T: Entity>: Send + Sync {
    async fn insert(&self, entity: &T) -> Result<(), RepoError>;
    async fn get(&self, id: T::Id) -> Result<Option<T>, RepoError>;

    /// Rows in store insertion order, windowed by `page`.
    async fn list(&self, page: Page) -> Result<Vec<T>, RepoError>;

    /// Replace the stored fields. `RepoError::NotFound` if the row is gone.
    async fn update(&self, entity: &T) -> Result<(), RepoError>;

    /// Delete the row and every membership referencing it in one transaction.
    /// `RepoError::NotFound` if the row is gone.
    async fn delete(&self, id: T::Id) -> Result<(), RepoError>;
}

// =============================================================================
// Membership Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipRepo: Send + Sync {
    async fn exists(&self, membership: Membership) -> Result<bool, RepoError>;

    /// Insert the pair. A duplicate pair is `RepoError::ConstraintViolation`,
    /// a dangling side is `RepoError::NotFound`.
    async fn insert(&self, membership: Membership) -> Result<(), RepoError>;

    /// Remove the pair, returning whether a row was deleted.
    async fn remove(&self, membership: Membership) -> Result<bool, RepoError>;

    /// Realms of each given creature, in membership-creation order.
    /// Creatures without memberships map to an empty list.
    async fn realms_of_creatures(
        &self,
        creature_ids: &[CreatureId],
    ) -> Result<HashMap<CreatureId, Vec<Realm>>, RepoError>;

    /// Creatures of each given realm, in membership-creation order.
    /// Realms without memberships map to an empty list.
    async fn creatures_of_realms(
        &self,
        realm_ids: &[RealmId],
    ) -> Result<HashMap<RealmId, Vec<Creature>>, RepoError>;

    /// One realm's creatures in membership-creation order, windowed by `page`.
    async fn creatures_in(&self, realm_id: RealmId, page: Page)
        -> Result<Vec<Creature>, RepoError>;
}
