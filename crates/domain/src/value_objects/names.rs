//! Name newtypes for domain entities
//!
//! Values are kept exactly as the caller supplied them: no trimming, no
//! length limit, and the empty string is a valid name. The types exist so a
//! species can never be passed where a creature name is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

define_name!(
    /// A creature's name
    CreatureName
);

define_name!(
    /// A creature's species label
    Species
);

define_name!(
    /// A realm's name
    RealmName
);
