//! Creature/realm membership.

use crate::ids::{CreatureId, RealmId};

/// Association between one creature and one realm.
///
/// Not independently addressable: the pair itself is the key, and a given
/// pair exists at most once. Memberships are created and removed, never
/// updated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Membership {
    pub creature_id: CreatureId,
    pub realm_id: RealmId,
}

impl Membership {
    pub fn new(creature_id: CreatureId, realm_id: RealmId) -> Self {
        Self {
            creature_id,
            realm_id,
        }
    }
}
