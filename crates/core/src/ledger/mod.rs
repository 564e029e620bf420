//! Ledger aggregation for reporting.
//!
//! This module implements the read side of the ledger:
//! - Journal lines (posted debit/credit rows with their journal date)
//! - Report filters (date range, department, project, classification)
//! - Per-account debit/credit aggregation
//! - Normal-balance polarity and signed amounts

pub mod aggregate;
pub mod filter;
pub mod polarity;
pub mod types;

pub use aggregate::aggregate_lines;
pub use filter::{LedgerFilter, ReportFilter};
pub use polarity::{AccountAmount, Polarity, resolve_amounts};
pub use types::{AccountTotals, JournalLine};
