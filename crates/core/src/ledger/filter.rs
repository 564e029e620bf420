//! Report filters.

use chrono::NaiveDate;
use neraca_shared::types::{ClassificationId, DepartmentId, ProjectId};
use serde::{Deserialize, Serialize};

use super::types::JournalLine;
use crate::coa::{Classification, ClassificationType};

/// Filter record accepted by every report.
///
/// Absent fields do not restrict the report. Values are assumed to be
/// well-typed; parsing happens at the calling layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Inclusive lower bound on the journal date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the journal date.
    pub date_to: Option<NaiveDate>,
    /// Only lines tagged with this department.
    pub department_id: Option<DepartmentId>,
    /// Only lines tagged with this project.
    pub project_id: Option<ProjectId>,
    /// Only accounts of this classification.
    pub classification_id: Option<ClassificationId>,
}

impl ReportFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts journal dates to `from..=to`.
    #[must_use]
    pub const fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Sets the inclusive lower date bound.
    #[must_use]
    pub const fn from_date(mut self, from: NaiveDate) -> Self {
        self.date_from = Some(from);
        self
    }

    /// Sets the inclusive upper date bound.
    #[must_use]
    pub const fn to_date(mut self, to: NaiveDate) -> Self {
        self.date_to = Some(to);
        self
    }

    /// Restricts to one department.
    #[must_use]
    pub const fn department(mut self, department_id: DepartmentId) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Restricts to one project.
    #[must_use]
    pub const fn project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Restricts to one classification.
    #[must_use]
    pub const fn classification(mut self, classification_id: ClassificationId) -> Self {
        self.classification_id = Some(classification_id);
        self
    }

    /// Returns the inverted bounds, if `date_from` is after `date_to`.
    #[must_use]
    pub fn inverted_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) if from > to => Some((from, to)),
            _ => None,
        }
    }

    /// Scopes the filter to a report's classification type.
    ///
    /// `None` covers every classification type.
    #[must_use]
    pub fn scoped(&self, classification_type: Option<ClassificationType>) -> LedgerFilter {
        LedgerFilter {
            classification_type,
            classification_id: self.classification_id,
            date_from: self.date_from,
            date_to: self.date_to,
            department_id: self.department_id,
            project_id: self.project_id,
        }
    }
}

/// Filter applied by the ledger aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerFilter {
    /// Classification type the account must belong to.
    pub classification_type: Option<ClassificationType>,
    /// Classification the account must belong to.
    pub classification_id: Option<ClassificationId>,
    /// Inclusive lower bound on the journal date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the journal date.
    pub date_to: Option<NaiveDate>,
    /// Required department tag.
    pub department_id: Option<DepartmentId>,
    /// Required project tag.
    pub project_id: Option<ProjectId>,
}

impl LedgerFilter {
    /// Returns true if the line passes the date and dimension filters.
    ///
    /// An untagged line never matches an active dimension filter.
    #[must_use]
    pub fn matches_line(&self, line: &JournalLine) -> bool {
        self.date_from.is_none_or(|from| line.date >= from)
            && self.date_to.is_none_or(|to| line.date <= to)
            && self
                .department_id
                .is_none_or(|department| line.department_id == Some(department))
            && self
                .project_id
                .is_none_or(|project| line.project_id == Some(project))
    }

    /// Returns true if accounts of this classification are in scope.
    #[must_use]
    pub fn matches_classification(&self, classification: &Classification) -> bool {
        self.classification_type
            .is_none_or(|kind| classification.kind == kind)
            && self
                .classification_id
                .is_none_or(|id| classification.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neraca_shared::types::{AccountId, JournalDetailId, JournalId};
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn line(on: NaiveDate, department: Option<i64>, project: Option<i64>) -> JournalLine {
        JournalLine {
            id: JournalDetailId::new(1),
            journal_id: JournalId::new(1),
            date: on,
            coa_id: AccountId::new(1),
            debit: Decimal::ONE,
            credit: Decimal::ZERO,
            department_id: department.map(DepartmentId::new),
            project_id: project.map(ProjectId::new),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ReportFilter::new().scoped(None);
        assert!(filter.matches_line(&line(date(2020, 1, 1), None, None)));
        assert!(filter.matches_line(&line(date(2030, 12, 31), Some(4), Some(9))));
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let filter = ReportFilter::new()
            .between(date(2026, 1, 1), date(2026, 1, 31))
            .scoped(None);

        assert!(filter.matches_line(&line(date(2026, 1, 1), None, None)));
        assert!(filter.matches_line(&line(date(2026, 1, 31), None, None)));
        assert!(!filter.matches_line(&line(date(2025, 12, 31), None, None)));
        assert!(!filter.matches_line(&line(date(2026, 2, 1), None, None)));
    }

    #[test]
    fn test_open_ended_date_bounds() {
        let from_only = ReportFilter::new().from_date(date(2026, 3, 1)).scoped(None);
        assert!(from_only.matches_line(&line(date(2099, 1, 1), None, None)));
        assert!(!from_only.matches_line(&line(date(2026, 2, 28), None, None)));

        let to_only = ReportFilter::new().to_date(date(2026, 3, 1)).scoped(None);
        assert!(to_only.matches_line(&line(date(1999, 1, 1), None, None)));
        assert!(!to_only.matches_line(&line(date(2026, 3, 2), None, None)));
    }

    #[test]
    fn test_dimension_filter_excludes_untagged_lines() {
        let filter = ReportFilter::new()
            .department(DepartmentId::new(1))
            .scoped(None);

        assert!(filter.matches_line(&line(date(2026, 1, 1), Some(1), None)));
        assert!(!filter.matches_line(&line(date(2026, 1, 1), Some(2), None)));
        assert!(!filter.matches_line(&line(date(2026, 1, 1), None, None)));

        let filter = ReportFilter::new().project(ProjectId::new(7)).scoped(None);
        assert!(filter.matches_line(&line(date(2026, 1, 1), None, Some(7))));
        assert!(!filter.matches_line(&line(date(2026, 1, 1), Some(1), None)));
    }

    #[test]
    fn test_classification_scope() {
        let revenue = Classification {
            id: ClassificationId::new(1),
            name: "Revenue".to_string(),
            kind: ClassificationType::ProfitLoss,
            is_active: true,
        };
        let assets = Classification {
            id: ClassificationId::new(2),
            name: "Assets".to_string(),
            kind: ClassificationType::BalanceSheet,
            is_active: true,
        };

        let profit_loss = ReportFilter::new().scoped(Some(ClassificationType::ProfitLoss));
        assert!(profit_loss.matches_classification(&revenue));
        assert!(!profit_loss.matches_classification(&assets));

        let every_type = ReportFilter::new().scoped(None);
        assert!(every_type.matches_classification(&revenue));
        assert!(every_type.matches_classification(&assets));

        let narrowed = ReportFilter::new()
            .classification(ClassificationId::new(2))
            .scoped(None);
        assert!(!narrowed.matches_classification(&revenue));
        assert!(narrowed.matches_classification(&assets));
    }

    #[test]
    fn test_inverted_range() {
        let ok = ReportFilter::new().between(date(2026, 1, 1), date(2026, 1, 1));
        assert_eq!(ok.inverted_range(), None);

        let bad = ReportFilter::new().between(date(2026, 2, 1), date(2026, 1, 1));
        assert_eq!(bad.inverted_range(), Some((date(2026, 2, 1), date(2026, 1, 1))));
    }
}
