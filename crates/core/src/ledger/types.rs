//! Ledger data types.

use chrono::NaiveDate;
use neraca_shared::types::{AccountId, DepartmentId, JournalDetailId, JournalId, ProjectId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A posted journal detail line together with its journal's date.
///
/// Lines are read-only input to reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Journal detail ID.
    pub id: JournalDetailId,
    /// Owning journal.
    pub journal_id: JournalId,
    /// Journal date.
    pub date: NaiveDate,
    /// Account the line is posted to.
    pub coa_id: AccountId,
    /// Debit amount (non-negative).
    pub debit: Decimal,
    /// Credit amount (non-negative).
    pub credit: Decimal,
    /// Department dimension tag.
    pub department_id: Option<DepartmentId>,
    /// Project dimension tag.
    pub project_id: Option<ProjectId>,
}

/// Cumulative debit and credit for one account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTotals {
    /// Total debit amount.
    pub total_debit: Decimal,
    /// Total credit amount.
    pub total_credit: Decimal,
}

impl AccountTotals {
    /// Creates totals from known sums.
    #[must_use]
    pub const fn new(total_debit: Decimal, total_credit: Decimal) -> Self {
        Self {
            total_debit,
            total_credit,
        }
    }

    /// Adds one line's amounts.
    pub fn add(&mut self, debit: Decimal, credit: Decimal) {
        self.total_debit += debit;
        self.total_credit += credit;
    }
}
