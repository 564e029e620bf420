//! Report data types.
//!
//! Monetary fields serialize as JSON numbers carrying exactly two
//! fractional digits.

use neraca_shared::types::{AccountId, ClassificationId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One node of an account tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTreeNode {
    /// Account ID.
    pub id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// The account's own signed amount, without descendants.
    #[serde(skip_serializing, default)]
    pub own_amount: Decimal,
    /// Rolled-up amount: own amount plus every child's rolled-up amount.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    /// Child accounts, sorted by code. Empty for leaves.
    pub children: Vec<AccountTreeNode>,
}

impl Drop for AccountTreeNode {
    fn drop(&mut self) {
        // Flatten so deep hierarchies are released without recursion
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// One classification section of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Classification ID.
    pub classification_id: ClassificationId,
    /// Classification name.
    pub classification_name: String,
    /// Root accounts of the section.
    pub accounts: Vec<AccountTreeNode>,
    /// Sum of the root accounts' rolled-up amounts.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total: Decimal,
}

/// Profit & Loss headline totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitLossTotals {
    /// Sum of credit-normal accounts' signed amounts.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub income: Decimal,
    /// Sum of debit-normal accounts' signed amounts.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub expense: Decimal,
    /// Income minus expense.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub net_profit: Decimal,
}

/// Profit & Loss report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitLossReport {
    /// Sections with at least one posted account.
    pub classifications: Vec<ClassificationReport>,
    /// Headline totals.
    pub totals: ProfitLossTotals,
}

/// Balance Sheet report.
///
/// Carries per-section totals only; assets = liabilities + equity is not
/// enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Every active balance-sheet section, including empty ones.
    pub classifications: Vec<ClassificationReport>,
}

/// Trial balance line for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceLine {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Total debit amount.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_debit: Decimal,
    /// Total credit amount.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_credit: Decimal,
    /// Signed balance in the account's natural direction.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

/// Trial balance totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debit.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_debit: Decimal,
    /// Total credit.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_credit: Decimal,
    /// Whether debits equal credits.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Accounts with postings, sorted by code.
    pub accounts: Vec<TrialBalanceLine>,
    /// Totals.
    pub totals: TrialBalanceTotals,
}
