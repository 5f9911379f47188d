//! Mythos domain types.
//!
//! Creatures and realms joined by a many-to-many membership. Everything here
//! is storage-agnostic; the engine crate provides persistence and HTTP.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Creature, Entity, Membership, Realm};
pub use error::DomainError;
pub use ids::{parse_id, CreatureId, RealmId};
pub use value_objects::{CreatureName, Page, RealmName, Species};
