//! Report facade over a ledger store.

use tracing::{debug, instrument};

use super::error::ReportError;
use super::service::{ReportData, ReportService};
use super::store::LedgerStore;
use super::types::{BalanceSheetReport, ProfitLossReport, TrialBalanceReport};
use crate::coa::ClassificationType;
use crate::ledger::ReportFilter;

/// Generates reports from a [`LedgerStore`].
///
/// Each call reads a fresh snapshot from the store and builds its own
/// trees; generators share no mutable state between calls.
#[derive(Debug, Clone)]
pub struct ReportGenerator<S> {
    store: S,
}

impl<S: LedgerStore> ReportGenerator<S> {
    /// Creates a generator over a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Generates the Profit & Loss report.
    ///
    /// # Errors
    ///
    /// Returns an error on an inverted date range, a cyclic account graph,
    /// or a store failure.
    #[instrument(name = "neraca.reports.profit_loss", skip(self))]
    pub async fn profit_loss(
        &self,
        filter: &ReportFilter,
    ) -> Result<ProfitLossReport, ReportError> {
        let data = self
            .load(Some(ClassificationType::ProfitLoss), filter)
            .await?;
        let report = ReportService::generate_profit_loss(&data)?;

        debug!(
            sections = report.classifications.len(),
            net_profit = %report.totals.net_profit,
            "profit and loss generated"
        );
        Ok(report)
    }

    /// Generates the Balance Sheet report.
    ///
    /// # Errors
    ///
    /// Returns an error on an inverted date range, a cyclic account graph,
    /// or a store failure.
    #[instrument(name = "neraca.reports.balance_sheet", skip(self))]
    pub async fn balance_sheet(
        &self,
        filter: &ReportFilter,
    ) -> Result<BalanceSheetReport, ReportError> {
        let data = self
            .load(Some(ClassificationType::BalanceSheet), filter)
            .await?;
        let report = ReportService::generate_balance_sheet(&data)?;

        debug!(
            sections = report.classifications.len(),
            "balance sheet generated"
        );
        Ok(report)
    }

    /// Generates the trial balance across every classification type.
    ///
    /// # Errors
    ///
    /// Returns an error on an inverted date range or a store failure.
    #[instrument(name = "neraca.reports.trial_balance", skip(self))]
    pub async fn trial_balance(
        &self,
        filter: &ReportFilter,
    ) -> Result<TrialBalanceReport, ReportError> {
        let data = self.load(None, filter).await?;
        let report = ReportService::generate_trial_balance(&data);

        debug!(
            accounts = report.accounts.len(),
            is_balanced = report.totals.is_balanced,
            "trial balance generated"
        );
        Ok(report)
    }

    async fn load(
        &self,
        kind: Option<ClassificationType>,
        filter: &ReportFilter,
    ) -> Result<ReportData, ReportError> {
        if let Some((start, end)) = filter.inverted_range() {
            return Err(ReportError::InvalidDateRange { start, end });
        }

        let classifications = self
            .store
            .classifications(kind, filter.classification_id)
            .await?;
        let ids: Vec<_> = classifications.iter().map(|c| c.id).collect();
        let accounts = if ids.is_empty() {
            Vec::new()
        } else {
            self.store.accounts(&ids).await?
        };
        let totals = self.store.aggregate(&filter.scoped(kind)).await?;

        debug!(
            classifications = classifications.len(),
            accounts = accounts.len(),
            aggregated = totals.len(),
            "report data loaded"
        );

        Ok(ReportData {
            classifications,
            accounts,
            totals,
        })
    }
}
