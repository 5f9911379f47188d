//! Realm entity.

use crate::entities::Entity;
use crate::ids::RealmId;
use crate::value_objects::RealmName;

/// A realm that contains any number of creatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Realm {
    id: RealmId,
    name: RealmName,
}

impl Realm {
    /// Create a new realm with a freshly generated identifier.
    pub fn new(name: RealmName) -> Self {
        Self::from_parts(RealmId::new(), name)
    }

    /// Rebuild a realm from stored values.
    pub fn from_parts(id: RealmId, name: RealmName) -> Self {
        Self { id, name }
    }

    #[inline]
    pub fn id(&self) -> RealmId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &RealmName {
        &self.name
    }

    pub fn rename(&mut self, name: RealmName) {
        self.name = name;
    }
}

impl Entity for Realm {
    type Id = RealmId;
    const KIND: &'static str = "Realm";

    fn id(&self) -> RealmId {
        self.id
    }
}
