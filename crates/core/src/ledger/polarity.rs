//! Normal-balance polarity.
//!
//! - Debit-normal (assets, expenses): amount = debit - credit
//! - Credit-normal (liabilities, equity, revenue): amount = credit - debit
//!
//! A positive signed amount always means the account moved in its
//! natural direction.

use std::collections::BTreeMap;

use neraca_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::AccountTotals;
use crate::coa::Account;

/// Direction in which an account's balance naturally increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// Balance increases with debits.
    DebitNormal,
    /// Balance increases with credits.
    CreditNormal,
}

impl Polarity {
    /// Maps the stored `is_debit` flag.
    #[must_use]
    pub const fn from_is_debit(is_debit: bool) -> Self {
        if is_debit {
            Self::DebitNormal
        } else {
            Self::CreditNormal
        }
    }

    /// Returns true for debit-normal accounts.
    #[must_use]
    pub const fn is_debit(self) -> bool {
        matches!(self, Self::DebitNormal)
    }

    /// Converts raw debit/credit sums into a signed amount.
    #[must_use]
    pub fn signed_amount(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::DebitNormal => debit - credit,
            Self::CreditNormal => credit - debit,
        }
    }
}

/// Aggregated amounts for one account, with its polarity applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAmount {
    /// Total debit amount.
    pub total_debit: Decimal,
    /// Total credit amount.
    pub total_credit: Decimal,
    /// Normal-balance direction.
    pub polarity: Polarity,
    /// Signed amount, unrounded.
    pub signed_amount: Decimal,
}

impl AccountAmount {
    /// Applies an account's polarity to its totals.
    #[must_use]
    pub fn resolve(polarity: Polarity, totals: AccountTotals) -> Self {
        Self {
            total_debit: totals.total_debit,
            total_credit: totals.total_credit,
            polarity,
            signed_amount: polarity.signed_amount(totals.total_debit, totals.total_credit),
        }
    }
}

/// Resolves signed amounts for every account that has totals.
///
/// Accounts without totals are left out; callers treat them as zero.
/// Totals for accounts not in `accounts` are ignored.
#[must_use]
pub fn resolve_amounts(
    accounts: &[Account],
    totals: &BTreeMap<AccountId, AccountTotals>,
) -> BTreeMap<AccountId, AccountAmount> {
    accounts
        .iter()
        .filter_map(|account| {
            totals
                .get(&account.id)
                .map(|t| (account.id, AccountAmount::resolve(account.polarity(), *t)))
        })
        .collect()
}
