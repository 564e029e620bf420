//! Typed IDs for type-safe entity references.
//!
//! Master data and ledger rows are keyed by database sequences, so every ID
//! wraps an `i64`. Using typed IDs prevents accidentally passing an
//! `AccountId` where a `ClassificationId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw database key.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw database key.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(AccountId, "Unique identifier for a chart of accounts entry.");
typed_id!(
    ClassificationId,
    "Unique identifier for an account classification (report section)."
);
typed_id!(DepartmentId, "Unique identifier for a department dimension.");
typed_id!(ProjectId, "Unique identifier for a project dimension.");
typed_id!(JournalId, "Unique identifier for a posted journal.");
typed_id!(JournalDetailId, "Unique identifier for a journal detail line.");

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
