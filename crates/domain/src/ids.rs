//! Typed identifiers and the identifier validator.
//!
//! Every caller-supplied identifier passes through [`parse_id`] before it is
//! used for a lookup, so malformed input is rejected without touching storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;

/// Parse a caller-supplied identifier.
///
/// Accepts any textual UUID form (hyphenated, simple, braced or URN) and
/// returns the typed id. Anything else, including surrounding whitespace,
/// is a [`DomainError::InvalidId`].
pub fn parse_id<I: From<Uuid>>(raw: &str) -> Result<I, DomainError> {
    Uuid::try_parse(raw)
        .map(I::from)
        .map_err(|_| DomainError::invalid_id(raw))
}

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.as_hyphenated())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_id(s)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(CreatureId);
define_id!(RealmId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_form() {
        let raw = "123e4567-e89b-12d3-a456-426614174000";
        let id: CreatureId = parse_id(raw).unwrap();
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn normalizes_to_lowercase_hyphenated() {
        let id: RealmId = "123E4567E89B12D3A456426614174000".parse().unwrap();
        assert_eq!(id.to_string(), "123e4567-e89b-12d3-a456-426614174000");
    }

    #[test]
    fn rejects_malformed_input() {
        for raw in ["", "not-a-uuid", "123e4567-e89b-12d3-a456", "zzze4567-e89b-12d3-a456-426614174000"] {
            let err = parse_id::<CreatureId>(raw).unwrap_err();
            assert!(err.is_invalid_id(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        for raw in [
            " 123e4567-e89b-12d3-a456-426614174000",
            "123e4567-e89b-12d3-a456-426614174000 ",
            "\t123e4567-e89b-12d3-a456-426614174000\n",
        ] {
            assert!(parse_id::<RealmId>(raw).unwrap_err().is_invalid_id(), "{raw:?}");
        }
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(CreatureId::new(), CreatureId::new());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = RealmId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }
}
