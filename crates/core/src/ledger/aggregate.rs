//! In-memory ledger aggregation.
//!
//! The database store performs the same aggregation with `GROUP BY coa_id`;
//! this version backs [`crate::reports::MemoryLedger`] and the tests.

use std::collections::{BTreeMap, HashMap};

use neraca_shared::types::{AccountId, ClassificationId};

use super::filter::LedgerFilter;
use super::types::{AccountTotals, JournalLine};
use crate::coa::{Account, Classification};

/// Sums debit and credit per account over the lines that pass `filter`.
///
/// A line is counted when its account belongs to an in-scope classification
/// and the line passes the date and dimension filters. Accounts without a
/// matching line are absent from the result. Lines posted to unknown
/// accounts, or to accounts with a dangling classification, are skipped.
#[must_use]
pub fn aggregate_lines(
    lines: &[JournalLine],
    accounts: &[Account],
    classifications: &[Classification],
    filter: &LedgerFilter,
) -> BTreeMap<AccountId, AccountTotals> {
    let in_scope: HashMap<ClassificationId, bool> = classifications
        .iter()
        .map(|c| (c.id, filter.matches_classification(c)))
        .collect();

    let account_in_scope: HashMap<AccountId, bool> = accounts
        .iter()
        .map(|a| {
            let scoped = in_scope
                .get(&a.classification_id)
                .copied()
                .unwrap_or(false);
            (a.id, scoped)
        })
        .collect();

    let mut totals: BTreeMap<AccountId, AccountTotals> = BTreeMap::new();

    for line in lines {
        let scoped = account_in_scope
            .get(&line.coa_id)
            .copied()
            .unwrap_or(false);

        if scoped && filter.matches_line(line) {
            totals
                .entry(line.coa_id)
                .or_default()
                .add(line.debit, line.credit);
        }
    }

    totals
}
