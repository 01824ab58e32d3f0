//! Identifier types for backend entities.
//!
//! The backend numbers its rows; each entity gets its own newtype so a
//! proposal id cannot be passed where a user id is expected.

use procure_sort::SortValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw backend id.
            #[must_use]
            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for SortValue<'_> {
            fn from(id: $name) -> Self {
                SortValue::from(id.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a purchase proposal.
    ProposalId
);
entity_id!(
    /// Identifier of a purchase order.
    PurchaseOrderId
);
entity_id!(
    /// Identifier of a user account.
    UserId
);
entity_id!(
    /// Identifier of a department.
    DepartmentId
);
entity_id!(
    /// Identifier of a funding source.
    FundingSourceId
);
