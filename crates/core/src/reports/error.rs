//! Report error types.

use chrono::NaiveDate;
use neraca_shared::types::AccountId;
use thiserror::Error;

/// Boxed error returned by a ledger store.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The account parent graph contains a cycle.
    #[error("Cyclic account hierarchy at account {account_id}")]
    CyclicHierarchy {
        /// First account found on the cycle.
        account_id: AccountId,
    },

    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// The ledger store failed; passed through unmodified.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ReportError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CyclicHierarchy { .. } => "CYCLIC_HIERARCHY",
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}
