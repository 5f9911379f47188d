//! Realm CRUD operations.

use std::sync::Arc;

use mythos_domain::{Creature, Page, Realm, RealmName};

use super::{crud, CrudError};
use crate::infrastructure::ports::{EntityRepo, MembershipRepo};

/// A realm together with the creatures it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealmWithCreatures {
    pub realm: Realm,
    pub creatures: Vec<Creature>,
}

pub struct RealmCrud {
    realms: Arc<dyn EntityRepo<Realm>>,
    memberships: Arc<dyn MembershipRepo>,
}

impl RealmCrud {
    pub fn new(realms: Arc<dyn EntityRepo<Realm>>, memberships: Arc<dyn MembershipRepo>) -> Self {
        Self {
            realms,
            memberships,
        }
    }

    pub async fn create(&self, name: String) -> Result<Realm, CrudError> {
        let realm = Realm::new(RealmName::new(name));
        self.realms.insert(&realm).await?;

        tracing::info!(realm_id = %realm.id(), name = %realm.name(), "Realm created");
        Ok(realm)
    }

    pub async fn list(&self, page: Page) -> Result<Vec<RealmWithCreatures>, CrudError> {
        let realms = crud::paginated_list(self.realms.as_ref(), page).await?;
        let ids: Vec<_> = realms.iter().map(Realm::id).collect();
        let mut creatures = self.memberships.creatures_of_realms(&ids).await?;

        Ok(realms
            .into_iter()
            .map(|realm| RealmWithCreatures {
                creatures: creatures.remove(&realm.id()).unwrap_or_default(),
                realm,
            })
            .collect())
    }

    pub async fn get(&self, raw_id: &str) -> Result<RealmWithCreatures, CrudError> {
        let realm = crud::fetch_or_fail(self.realms.as_ref(), raw_id).await?;
        let creatures = self
            .memberships
            .creatures_of_realms(&[realm.id()])
            .await?
            .remove(&realm.id())
            .unwrap_or_default();

        Ok(RealmWithCreatures { realm, creatures })
    }

    pub async fn update(&self, raw_id: &str, name: String) -> Result<Realm, CrudError> {
        let mut realm = crud::fetch_or_fail(self.realms.as_ref(), raw_id).await?;
        realm.rename(RealmName::new(name));
        self.realms.update(&realm).await?;

        tracing::info!(realm_id = %realm.id(), "Realm updated");
        Ok(realm)
    }

    /// Delete the realm; its memberships go with it.
    pub async fn delete(&self, raw_id: &str) -> Result<(), CrudError> {
        crud::remove(self.realms.as_ref(), raw_id).await?;
        tracing::info!(realm_id = %raw_id, "Realm deleted");
        Ok(())
    }

    /// The realm's creatures in membership-creation order, windowed by `page`.
    pub async fn list_creatures(&self, raw_id: &str, page: Page) -> Result<Vec<Creature>, CrudError> {
        let realm = crud::fetch_or_fail(self.realms.as_ref(), raw_id).await?;
        Ok(self.memberships.creatures_in(realm.id(), page).await?)
    }
}
