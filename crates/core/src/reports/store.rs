//! Ledger store boundary.
//!
//! Reports read master data and aggregated totals through [`LedgerStore`].
//! The database crate implements it with SQL; [`MemoryLedger`] keeps
//! everything in vectors.

use std::collections::BTreeMap;

use async_trait::async_trait;
use neraca_shared::types::{AccountId, ClassificationId};

use super::error::StoreError;
use crate::coa::{Account, Classification, ClassificationType};
use crate::ledger::{AccountTotals, JournalLine, LedgerFilter, aggregate_lines};

/// Read-only access to chart of accounts data and the journal ledger.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Returns active classifications ordered by id.
    ///
    /// `kind = None` returns every type; `id` narrows to one classification.
    async fn classifications(
        &self,
        kind: Option<ClassificationType>,
        id: Option<ClassificationId>,
    ) -> Result<Vec<Classification>, StoreError>;

    /// Returns active accounts of the given classifications ordered by code.
    async fn accounts(
        &self,
        classification_ids: &[ClassificationId],
    ) -> Result<Vec<Account>, StoreError>;

    /// Sums debit and credit per account over the filtered journal lines.
    async fn aggregate(
        &self,
        filter: &LedgerFilter,
    ) -> Result<BTreeMap<AccountId, AccountTotals>, StoreError>;
}

/// An in-memory ledger.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    classifications: Vec<Classification>,
    accounts: Vec<Account>,
    lines: Vec<JournalLine>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a classification.
    #[must_use]
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classifications.push(classification);
        self
    }

    /// Adds an account.
    #[must_use]
    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.push(account);
        self
    }

    /// Appends a posted journal line.
    pub fn post(&mut self, line: JournalLine) {
        self.lines.push(line);
    }
}

#[async_trait]
impl LedgerStore for MemoryLedger {
    async fn classifications(
        &self,
        kind: Option<ClassificationType>,
        id: Option<ClassificationId>,
    ) -> Result<Vec<Classification>, StoreError> {
        let mut found: Vec<Classification> = self
            .classifications
            .iter()
            .filter(|c| c.is_active)
            .filter(|c| kind.is_none_or(|k| c.kind == k))
            .filter(|c| id.is_none_or(|i| c.id == i))
            .cloned()
            .collect();
        found.sort_by_key(|c| c.id);
        Ok(found)
    }

    async fn accounts(
        &self,
        classification_ids: &[ClassificationId],
    ) -> Result<Vec<Account>, StoreError> {
        let mut found: Vec<Account> = self
            .accounts
            .iter()
            .filter(|a| a.is_active && classification_ids.contains(&a.classification_id))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));
        Ok(found)
    }

    async fn aggregate(
        &self,
        filter: &LedgerFilter,
    ) -> Result<BTreeMap<AccountId, AccountTotals>, StoreError> {
        Ok(aggregate_lines(
            &self.lines,
            &self.accounts,
            &self.classifications,
            filter,
        ))
    }
}
