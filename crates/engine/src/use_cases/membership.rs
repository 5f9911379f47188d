//! Membership create/delete.
//!
//! Checks run in a fixed order: both identifiers are validated, then both
//! entities must exist, and only then is the membership state consulted.

use std::sync::Arc;

use mythos_domain::{Creature, Membership, Realm};

use super::{crud, CrudError};
use crate::infrastructure::ports::{EntityRepo, MembershipRepo, RepoError};

pub struct MembershipUseCases {
    creatures: Arc<dyn EntityRepo<Creature>>,
    realms: Arc<dyn EntityRepo<Realm>>,
    memberships: Arc<dyn MembershipRepo>,
}

impl MembershipUseCases {
    pub fn new(
        creatures: Arc<dyn EntityRepo<Creature>>,
        realms: Arc<dyn EntityRepo<Realm>>,
        memberships: Arc<dyn MembershipRepo>,
    ) -> Self {
        Self {
            creatures,
            realms,
            memberships,
        }
    }

    async fn resolve(
        &self,
        raw_creature_id: &str,
        raw_realm_id: &str,
    ) -> Result<Membership, CrudError> {
        let creature_id = crud::validate_id::<Creature>(raw_creature_id)?;
        let realm_id = crud::validate_id::<Realm>(raw_realm_id)?;

        crud::fetch_by_id(self.creatures.as_ref(), creature_id).await?;
        crud::fetch_by_id(self.realms.as_ref(), realm_id).await?;

        Ok(Membership::new(creature_id, realm_id))
    }

    /// Associate a creature with a realm.
    pub async fn create(
        &self,
        raw_creature_id: &str,
        raw_realm_id: &str,
    ) -> Result<Membership, CrudError> {
        let membership = self.resolve(raw_creature_id, raw_realm_id).await?;

        if self.memberships.exists(membership).await? {
            return Err(CrudError::DuplicateMembership);
        }

        // A concurrent insert can still beat us to the unique constraint.
        match self.memberships.insert(membership).await {
            Ok(()) => {}
            Err(RepoError::ConstraintViolation(_)) => return Err(CrudError::DuplicateMembership),
            Err(e) => return Err(e.into()),
        }

        tracing::info!(
            creature_id = %membership.creature_id,
            realm_id = %membership.realm_id,
            "Membership created"
        );
        Ok(membership)
    }

    /// Dissociate a creature from a realm.
    pub async fn delete(&self, raw_creature_id: &str, raw_realm_id: &str) -> Result<(), CrudError> {
        let membership = self.resolve(raw_creature_id, raw_realm_id).await?;

        if !self.memberships.remove(membership).await? {
            return Err(CrudError::MembershipNotFound);
        }

        tracing::info!(
            creature_id = %membership.creature_id,
            realm_id = %membership.realm_id,
            "Membership deleted"
        );
        Ok(())
    }
}
