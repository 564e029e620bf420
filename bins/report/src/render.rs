//! Runs a report and serializes it.

use neraca_core::ledger::ReportFilter;
use neraca_core::reports::{LedgerStore, ReportError, ReportGenerator};
use neraca_shared::{AppError, AppResult};
use serde::Serialize;

use crate::cli::ReportKind;

/// Generates `kind` and returns it as JSON.
pub async fn render<S: LedgerStore>(
    generator: &ReportGenerator<S>,
    kind: ReportKind,
    filter: &ReportFilter,
    pretty: bool,
) -> AppResult<String> {
    match kind {
        ReportKind::ProfitLoss => {
            let report = generator.profit_loss(filter).await.map_err(report_error)?;
            to_json(&report, pretty)
        }
        ReportKind::BalanceSheet => {
            let report = generator.balance_sheet(filter).await.map_err(report_error)?;
            to_json(&report, pretty)
        }
        ReportKind::TrialBalance => {
            let report = generator.trial_balance(filter).await.map_err(report_error)?;
            to_json(&report, pretty)
        }
    }
}

/// Maps engine errors onto application errors.
fn report_error(err: ReportError) -> AppError {
    match err {
        ReportError::InvalidDateRange { .. } => AppError::Validation(err.to_string()),
        ReportError::CyclicHierarchy { .. } => AppError::Internal(err.to_string()),
        ReportError::Store(_) => AppError::Database(err.to_string()),
    }
}

fn to_json<T: Serialize>(report: &T, pretty: bool) -> AppResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.map_err(|e| AppError::Internal(e.to_string()))
}
