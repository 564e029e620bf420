//! Chart of accounts data types.

use neraca_shared::types::{AccountId, ClassificationId};
use serde::{Deserialize, Serialize};

use super::error::CoaError;
use crate::ledger::Polarity;

/// Which report a classification feeds.
///
/// Each variant carries its own section policy:
/// - Profit & Loss drops sections without postings and splits income/expense.
/// - Balance Sheet keeps every active section, even at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationType {
    /// Revenue and expense sections.
    ProfitLoss,
    /// Asset, liability and equity sections.
    BalanceSheet,
}

impl ClassificationType {
    /// Returns the stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProfitLoss => "profit-loss",
            Self::BalanceSheet => "balance-sheet",
        }
    }

    /// Whether sections whose accounts have no postings are left out.
    #[must_use]
    pub const fn drops_empty_sections(self) -> bool {
        matches!(self, Self::ProfitLoss)
    }

    /// Whether the report carries income, expense and net profit totals.
    #[must_use]
    pub const fn splits_income_expense(self) -> bool {
        matches!(self, Self::ProfitLoss)
    }
}

impl std::fmt::Display for ClassificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClassificationType {
    type Err = CoaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "profit-loss" => Ok(Self::ProfitLoss),
            "balance-sheet" => Ok(Self::BalanceSheet),
            _ => Err(CoaError::UnknownClassificationType(s.to_string())),
        }
    }
}

/// A report section grouping accounts (Revenue, Expense, Asset, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Classification ID.
    pub id: ClassificationId,
    /// Display name.
    pub name: String,
    /// Report the classification feeds.
    #[serde(rename = "type")]
    pub kind: ClassificationType,
    /// Soft filter flag.
    pub is_active: bool,
}

/// A chart of accounts node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Parent account, `None` for top-level accounts.
    pub parent_id: Option<AccountId>,
    /// Short display code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// True when the normal balance increases with debits.
    pub is_debit: bool,
    /// Owning classification.
    pub classification_id: ClassificationId,
    /// Soft filter flag.
    pub is_active: bool,
}

impl Account {
    /// Returns the account's normal-balance direction.
    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        Polarity::from_is_debit(self.is_debit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_classification_type_strings() {
        assert_eq!(ClassificationType::ProfitLoss.as_str(), "profit-loss");
        assert_eq!(ClassificationType::BalanceSheet.to_string(), "balance-sheet");
        assert_eq!(
            ClassificationType::from_str("Balance-Sheet").unwrap(),
            ClassificationType::BalanceSheet
        );
        assert_eq!(
            ClassificationType::from_str("cash-flow"),
            Err(CoaError::UnknownClassificationType("cash-flow".to_string()))
        );
    }

    #[test]
    fn test_classification_type_policies() {
        assert!(ClassificationType::ProfitLoss.drops_empty_sections());
        assert!(ClassificationType::ProfitLoss.splits_income_expense());
        assert!(!ClassificationType::BalanceSheet.drops_empty_sections());
        assert!(!ClassificationType::BalanceSheet.splits_income_expense());
    }

    #[test]
    fn test_classification_serializes_type_field() {
        let classification = Classification {
            id: ClassificationId::new(1),
            name: "Revenue".to_string(),
            kind: ClassificationType::ProfitLoss,
            is_active: true,
        };
        let json = serde_json::to_value(&classification).unwrap();
        assert_eq!(json["type"], "profit-loss");
    }
}
