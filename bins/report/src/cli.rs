//! Command-line arguments.

use std::fmt;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use neraca_core::ledger::ReportFilter;
use neraca_shared::types::{ClassificationId, DepartmentId, ProjectId};
use neraca_shared::{AppError, AppResult};

/// Generate financial reports from the Neraca ledger.
#[derive(Debug, Parser)]
#[command(name = "neraca-report", version, long_about = None)]
pub struct Cli {
    /// Report to generate.
    #[arg(value_enum)]
    pub report: ReportKind,

    /// First journal date to include.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: Option<NaiveDate>,

    /// Last journal date to include.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: Option<NaiveDate>,

    /// Only lines tagged with this department.
    #[arg(long, value_name = "ID")]
    pub department: Option<DepartmentId>,

    /// Only lines tagged with this project.
    #[arg(long, value_name = "ID")]
    pub project: Option<ProjectId>,

    /// Only this classification.
    #[arg(long, value_name = "ID")]
    pub classification: Option<ClassificationId>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Reports the runner can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Profit & Loss.
    ProfitLoss,
    /// Balance Sheet.
    BalanceSheet,
    /// Trial Balance.
    TrialBalance,
}

impl ReportKind {
    /// Returns the command-line name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProfitLoss => "profit-loss",
            Self::BalanceSheet => "balance-sheet",
            Self::TrialBalance => "trial-balance",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Cli {
    /// Builds the report filter, rejecting an inverted date range.
    pub fn filter(&self) -> AppResult<ReportFilter> {
        let filter = ReportFilter {
            date_from: self.from,
            date_to: self.to,
            department_id: self.department,
            project_id: self.project,
            classification_id: self.classification,
        };

        if let Some((start, end)) = filter.inverted_range() {
            return Err(AppError::Validation(format!(
                "--from {start} is after --to {end}"
            )));
        }

        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("neraca-report").chain(args.iter().copied())).unwrap()
    }

    #[rstest]
    #[case("profit-loss", ReportKind::ProfitLoss)]
    #[case("balance-sheet", ReportKind::BalanceSheet)]
    #[case("trial-balance", ReportKind::TrialBalance)]
    fn test_report_names(#[case] name: &str, #[case] expected: ReportKind) {
        let cli = parse(&[name]);
        assert_eq!(cli.report, expected);
        assert_eq!(cli.report.to_string(), name);
    }

    #[test]
    fn test_filter_options_are_parsed() {
        let cli = parse(&[
            "profit-loss",
            "--from",
            "2026-01-01",
            "--to",
            "2026-01-31",
            "--department",
            "3",
            "--project",
            "9",
            "--classification",
            "4",
            "--pretty",
        ]);

        let filter = cli.filter().unwrap();
        assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2026, 1, 1));
        assert_eq!(filter.date_to, NaiveDate::from_ymd_opt(2026, 1, 31));
        assert_eq!(filter.department_id, Some(DepartmentId::new(3)));
        assert_eq!(filter.project_id, Some(ProjectId::new(9)));
        assert_eq!(filter.classification_id, Some(ClassificationId::new(4)));
        assert!(cli.pretty);
    }

    #[test]
    fn test_no_options_means_unfiltered() {
        let cli = parse(&["balance-sheet"]);
        assert_eq!(cli.filter().unwrap(), ReportFilter::new());
        assert!(!cli.pretty);
    }

    #[test]
    fn test_inverted_range_is_a_validation_error() {
        let cli = parse(&["profit-loss", "--from", "2026-02-01", "--to", "2026-01-01"]);

        let err = cli.filter().unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("2026-02-01"));
    }

    #[test]
    fn test_same_day_range_is_accepted() {
        let cli = parse(&["trial-balance", "--from", "2026-03-31", "--to", "2026-03-31"]);
        assert!(cli.filter().is_ok());
    }

    #[rstest]
    #[case(&["cash-flow"])]
    #[case(&["profit-loss", "--from", "31/01/2026"])]
    #[case(&["profit-loss", "--department", "sales"])]
    fn test_bad_arguments_are_rejected(#[case] args: &[&str]) {
        let argv = std::iter::once("neraca-report").chain(args.iter().copied());
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
