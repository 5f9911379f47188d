//! Creature CRUD operations.

use std::sync::Arc;

use mythos_domain::{Creature, CreatureName, Page, Realm, Species};

use super::{crud, CrudError};
use crate::infrastructure::ports::{EntityRepo, MembershipRepo};

/// A creature together with the realms it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureWithRealms {
    pub creature: Creature,
    pub realms: Vec<Realm>,
}

pub struct CreatureCrud {
    creatures: Arc<dyn EntityRepo<Creature>>,
    memberships: Arc<dyn MembershipRepo>,
}

impl CreatureCrud {
    pub fn new(
        creatures: Arc<dyn EntityRepo<Creature>>,
        memberships: Arc<dyn MembershipRepo>,
    ) -> Self {
        Self {
            creatures,
            memberships,
        }
    }

    pub async fn create(&self, name: String, species: String) -> Result<Creature, CrudError> {
        let creature = Creature::new(CreatureName::new(name), Species::new(species));
        self.creatures.insert(&creature).await?;

        tracing::info!(creature_id = %creature.id(), name = %creature.name(), "Creature created");
        Ok(creature)
    }

    pub async fn list(&self, page: Page) -> Result<Vec<CreatureWithRealms>, CrudError> {
        let creatures = crud::paginated_list(self.creatures.as_ref(), page).await?;
        let ids: Vec<_> = creatures.iter().map(Creature::id).collect();
        let mut realms = self.memberships.realms_of_creatures(&ids).await?;

        Ok(creatures
            .into_iter()
            .map(|creature| CreatureWithRealms {
                realms: realms.remove(&creature.id()).unwrap_or_default(),
                creature,
            })
            .collect())
    }

    pub async fn get(&self, raw_id: &str) -> Result<CreatureWithRealms, CrudError> {
        let creature = crud::fetch_or_fail(self.creatures.as_ref(), raw_id).await?;
        let realms = self
            .memberships
            .realms_of_creatures(&[creature.id()])
            .await?
            .remove(&creature.id())
            .unwrap_or_default();

        tracing::debug!(creature_id = %creature.id(), realms = realms.len(), "Creature fetched");
        Ok(CreatureWithRealms { creature, realms })
    }

    /// Replace name and species. The identifier never changes.
    pub async fn update(
        &self,
        raw_id: &str,
        name: String,
        species: String,
    ) -> Result<Creature, CrudError> {
        let mut creature = crud::fetch_or_fail(self.creatures.as_ref(), raw_id).await?;
        creature.rename(CreatureName::new(name), Species::new(species));
        self.creatures.update(&creature).await?;

        tracing::info!(creature_id = %creature.id(), "Creature updated");
        Ok(creature)
    }

    /// Delete the creature; its memberships go with it.
    pub async fn delete(&self, raw_id: &str) -> Result<(), CrudError> {
        crud::remove(self.creatures.as_ref(), raw_id).await?;
        tracing::info!(creature_id = %raw_id, "Creature deleted");
        Ok(())
    }
}
