//! Creature entity.

use crate::entities::Entity;
use crate::ids::CreatureId;
use crate::value_objects::{CreatureName, Species};

/// A creature that may belong to any number of realms.
///
/// # Invariants
///
/// - `id` never changes after construction
/// - `name` and `species` are always valid (enforced by their newtypes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    id: CreatureId,
    name: CreatureName,
    species: Species,
}

impl Creature {
    /// Create a new creature with a freshly generated identifier.
    pub fn new(name: CreatureName, species: Species) -> Self {
        Self::from_parts(CreatureId::new(), name, species)
    }

    /// Rebuild a creature from stored values.
    pub fn from_parts(id: CreatureId, name: CreatureName, species: Species) -> Self {
        Self { id, name, species }
    }

    #[inline]
    pub fn id(&self) -> CreatureId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &CreatureName {
        &self.name
    }

    #[inline]
    pub fn species(&self) -> &Species {
        &self.species
    }

    /// Replace the mutable fields. The identifier is kept.
    pub fn rename(&mut self, name: CreatureName, species: Species) {
        self.name = name;
        self.species = species;
    }
}

impl Entity for Creature {
    type Id = CreatureId;
    const KIND: &'static str = "Creature";

    fn id(&self) -> CreatureId {
        self.id
    }
}
