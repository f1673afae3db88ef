//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `FuelInId` where a
//! `LocationId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(LocationId, "Unique identifier for a depot location.");
typed_id!(FuelInId, "Unique identifier for an inflow record.");
typed_id!(FuelOutId, "Unique identifier for an outflow record.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_round_trip() {
        let uuid = Uuid::new_v4();
        let id = LocationId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
        assert_eq!(LocationId::from_str(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_typed_id_from_str_error() {
        assert!(FuelInId::from_str("not-a-uuid").is_err());
    }

    #[test]
    fn test_typed_ids_are_distinct_types() {
        // Compile-time check: each generated ID is its own type.
        let location: LocationId = LocationId::new();
        let fuel_in: FuelInId = FuelInId::new();
        assert_ne!(location.into_inner(), fuel_in.into_inner());
    }
}
