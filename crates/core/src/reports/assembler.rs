//! Classification section assembly.

use std::collections::BTreeMap;

use neraca_shared::types::{AccountId, round_money};
use rust_decimal::Decimal;

use super::error::ReportError;
use super::tree::build_tree;
use super::types::ClassificationReport;
use crate::coa::{Account, Classification, ClassificationType};
use crate::ledger::AccountAmount;

/// Builds one section per classification, in the order given.
///
/// Each section holds the active accounts pointing at the classification,
/// arranged as a tree. The section total is the rounded sum of its roots.
/// When `kind` drops empty sections, a classification none of whose
/// accounts has postings in `amounts` is left out.
///
/// # Errors
///
/// Returns [`ReportError::CyclicHierarchy`] if a section's accounts form a cycle.
pub fn assemble_sections(
    kind: ClassificationType,
    classifications: &[Classification],
    accounts: &[Account],
    amounts: &BTreeMap<AccountId, AccountAmount>,
) -> Result<Vec<ClassificationReport>, ReportError> {
    let mut sections = Vec::with_capacity(classifications.len());

    for classification in classifications {
        let members: Vec<Account> = accounts
            .iter()
            .filter(|a| a.is_active && a.classification_id == classification.id)
            .cloned()
            .collect();

        if kind.drops_empty_sections() && !members.iter().any(|a| amounts.contains_key(&a.id)) {
            continue;
        }

        let roots = build_tree(&members, amounts)?;
        let total = round_money(roots.iter().map(|r| r.amount).sum::<Decimal>());

        sections.push(ClassificationReport {
            classification_id: classification.id,
            classification_name: classification.name.clone(),
            accounts: roots,
            total,
        });
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{AccountTotals, resolve_amounts};
    use neraca_shared::types::ClassificationId;
    use rust_decimal_macros::dec;

    fn classification(id: i64, name: &str, kind: ClassificationType) -> Classification {
        Classification {
            id: ClassificationId::new(id),
            name: name.to_string(),
            kind,
            is_active: true,
        }
    }

    fn account(id: i64, classification_id: i64, is_active: bool) -> Account {
        Account {
            id: AccountId::new(id),
            parent_id: None,
            code: format!("{}", 4000 + id),
            name: format!("Account {id}"),
            is_debit: false,
            classification_id: ClassificationId::new(classification_id),
            is_active,
        }
    }

    #[test]
    fn test_profit_loss_drops_sections_without_postings() {
        let classifications = vec![
            classification(1, "Revenue", ClassificationType::ProfitLoss),
            classification(2, "Other Income", ClassificationType::ProfitLoss),
        ];
        let accounts = vec![account(1, 1, true), account(2, 2, true)];
        let totals = BTreeMap::from([(AccountId::new(1), AccountTotals::new(dec!(0), dec!(10)))]);
        let amounts = resolve_amounts(&accounts, &totals);

        let sections = assemble_sections(
            ClassificationType::ProfitLoss,
            &classifications,
            &accounts,
            &amounts,
        )
        .unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].classification_name, "Revenue");
        assert_eq!(sections[0].total, dec!(10.00));
    }

    #[test]
    fn test_balance_sheet_keeps_empty_sections() {
        let classifications = vec![
            classification(1, "Assets", ClassificationType::BalanceSheet),
            classification(2, "Liabilities", ClassificationType::BalanceSheet),
            classification(3, "Equity", ClassificationType::BalanceSheet),
        ];
        let accounts = vec![account(1, 1, true), account(2, 2, true)];

        let sections = assemble_sections(
            ClassificationType::BalanceSheet,
            &classifications,
            &accounts,
            &BTreeMap::new(),
        )
        .unwrap();

        assert_eq!(sections.len(), 3);
        assert!(sections.iter().all(|s| s.total == Decimal::ZERO));
        assert!(sections[2].accounts.is_empty());
        assert_eq!(sections[0].accounts[0].amount.to_string(), "0.00");
    }

    #[test]
    fn test_inactive_accounts_are_excluded() {
        let classifications = vec![classification(1, "Assets", ClassificationType::BalanceSheet)];
        let accounts = vec![account(1, 1, true), account(2, 1, false)];
        let totals = BTreeMap::from([
            (AccountId::new(1), AccountTotals::new(dec!(0), dec!(3))),
            (AccountId::new(2), AccountTotals::new(dec!(0), dec!(4))),
        ]);
        let amounts = resolve_amounts(&accounts, &totals);

        let sections = assemble_sections(
            ClassificationType::BalanceSheet,
            &classifications,
            &accounts,
            &amounts,
        )
        .unwrap();

        assert_eq!(sections[0].accounts.len(), 1);
        assert_eq!(sections[0].total, dec!(3));
    }
}
