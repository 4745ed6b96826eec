//! Entity identifier newtypes.
//!
//! Identifiers are UUIDv4 values generated by the record store on insert.
//! The newtypes keep student, teacher, and course ids from being mixed up
//! at compile time; all serialise as plain UUID strings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_entity_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            pub const fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            /// The underlying UUID value.
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(value).map(Self)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_entity_id! {
    /// Stable student identifier.
    StudentId
}

define_entity_id! {
    /// Stable teacher identifier.
    TeacherId
}

define_entity_id! {
    /// Stable course identifier.
    CourseId
}
