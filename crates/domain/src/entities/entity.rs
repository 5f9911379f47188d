//! The capability set shared by every persisted entity.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::DomainError;

/// An entity that has a unique, store-assigned identifier and lives in its
/// own table.
///
/// Generic lookup, listing and deletion are written once against this trait
/// and instantiated per entity type.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Typed identifier of the entity.
    type Id: Copy
        + Eq
        + Hash
        + fmt::Debug
        + fmt::Display
        + FromStr<Err = DomainError>
        + Send
        + Sync
        + 'static;

    /// Human-readable entity name used in error details ("Creature not found").
    const KIND: &'static str;

    fn id(&self) -> Self::Id;
}
