//! Value objects: entity names and pagination windows.

mod names;
mod page;

pub use names::{CreatureName, RealmName, Species};
pub use page::Page;
