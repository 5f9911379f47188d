//! Domain entities.

mod creature;
mod entity;
mod membership;
mod realm;

pub use creature::Creature;
pub use entity::Entity;
pub use membership::Membership;
pub use realm::Realm;
