//! Report generation service.

use std::collections::BTreeMap;

use neraca_shared::types::{AccountId, round_money};
use rust_decimal::Decimal;

use super::assembler::assemble_sections;
use super::error::ReportError;
use super::types::{
    BalanceSheetReport, ProfitLossReport, ProfitLossTotals, TrialBalanceLine, TrialBalanceReport,
    TrialBalanceTotals,
};
use crate::coa::{Account, Classification, ClassificationType};
use crate::ledger::{AccountAmount, AccountTotals, resolve_amounts};

/// Master data and aggregated totals loaded for one report request.
#[derive(Debug, Clone, Default)]
pub struct ReportData {
    /// Active classifications in scope, in display order.
    pub classifications: Vec<Classification>,
    /// Active accounts of those classifications.
    pub accounts: Vec<Account>,
    /// Per-account debit/credit sums for the filtered ledger slice.
    pub totals: BTreeMap<AccountId, AccountTotals>,
}

/// Service for generating financial reports from loaded data.
pub struct ReportService;

impl ReportService {
    /// Generates a Profit & Loss report.
    ///
    /// Income is the sum of credit-normal accounts' signed amounts, expense
    /// the sum of debit-normal accounts', both taken from the same amounts
    /// the trees are built from.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::CyclicHierarchy`] on a cyclic account graph.
    pub fn generate_profit_loss(data: &ReportData) -> Result<ProfitLossReport, ReportError> {
        let kind = ClassificationType::ProfitLoss;
        let amounts = resolve_amounts(&data.accounts, &data.totals);
        let classifications =
            assemble_sections(kind, &data.classifications, &data.accounts, &amounts)?;

        let (income, expense) = Self::split_income_expense(&data.accounts, &amounts);

        Ok(ProfitLossReport {
            classifications,
            totals: ProfitLossTotals {
                income,
                expense,
                net_profit: round_money(income - expense),
            },
        })
    }

    /// Generates a Balance Sheet report.
    ///
    /// Every active balance-sheet classification is listed, even at zero.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::CyclicHierarchy`] on a cyclic account graph.
    pub fn generate_balance_sheet(data: &ReportData) -> Result<BalanceSheetReport, ReportError> {
        let amounts = resolve_amounts(&data.accounts, &data.totals);
        let classifications = assemble_sections(
            ClassificationType::BalanceSheet,
            &data.classifications,
            &data.accounts,
            &amounts,
        )?;

        Ok(BalanceSheetReport { classifications })
    }

    /// Generates a trial balance from account totals.
    ///
    /// Only accounts with postings are listed, sorted by code.
    #[must_use]
    pub fn generate_trial_balance(data: &ReportData) -> TrialBalanceReport {
        let mut posted: Vec<(&Account, AccountTotals)> = data
            .accounts
            .iter()
            .filter(|a| a.is_active)
            .filter_map(|a| data.totals.get(&a.id).map(|t| (a, *t)))
            .collect();
        posted.sort_by(|(a, _), (b, _)| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));

        let lines: Vec<TrialBalanceLine> = posted
            .into_iter()
            .map(|(account, totals)| {
                let amount = AccountAmount::resolve(account.polarity(), totals);
                TrialBalanceLine {
                    account_id: account.id,
                    code: account.code.clone(),
                    name: account.name.clone(),
                    total_debit: round_money(totals.total_debit),
                    total_credit: round_money(totals.total_credit),
                    balance: round_money(amount.signed_amount),
                }
            })
            .collect();

        let total_debit = round_money(lines.iter().map(|l| l.total_debit).sum());
        let total_credit = round_money(lines.iter().map(|l| l.total_credit).sum());

        TrialBalanceReport {
            accounts: lines,
            totals: TrialBalanceTotals {
                total_debit,
                total_credit,
                is_balanced: total_debit == total_credit,
            },
        }
    }

    /// Sums signed amounts of active accounts into (income, expense).
    fn split_income_expense(
        accounts: &[Account],
        amounts: &BTreeMap<AccountId, AccountAmount>,
    ) -> (Decimal, Decimal) {
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;

        for account in accounts.iter().filter(|a| a.is_active) {
            let Some(amount) = amounts.get(&account.id) else {
                continue;
            };
            if amount.polarity.is_debit() {
                expense += amount.signed_amount;
            } else {
                income += amount.signed_amount;
            }
        }

        (round_money(income), round_money(expense))
    }
}
