//! Report repository: the SQL-backed ledger store.
//!
//! Master data is read with plain entity queries; journal lines are never
//! loaded row by row. Aggregation runs in the database as
//! `SUM(debit), SUM(credit) ... GROUP BY coa_id`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use neraca_core::coa::{Account, Classification, ClassificationType, CoaError};
use neraca_core::ledger::{AccountTotals, LedgerFilter};
use neraca_core::reports::{LedgerStore, StoreError};
use neraca_shared::types::{AccountId, ClassificationId};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use tracing::debug;

use crate::entities::{classifications, coas, journal_details, journals};

/// Error types for report repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A stored classification carries an unknown type.
    #[error(transparent)]
    Coa(#[from] CoaError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Per-account sums as returned by the aggregation query.
#[derive(Debug, FromQueryResult)]
struct AccountTotalsRow {
    coa_id: i64,
    total_debit: Option<Decimal>,
    total_credit: Option<Decimal>,
}

/// Report repository for financial report queries.
#[derive(Debug)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Queries active classifications, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row has an unknown type.
    pub async fn query_classifications(
        &self,
        kind: Option<ClassificationType>,
        id: Option<ClassificationId>,
    ) -> Result<Vec<Classification>, RepositoryError> {
        let mut query = classifications::Entity::find()
            .filter(classifications::Column::IsActive.eq(true));

        if let Some(kind) = kind {
            query = query.filter(classifications::Column::Kind.eq(kind.as_str()));
        }
        if let Some(id) = id {
            query = query.filter(classifications::Column::Id.eq(id.into_inner()));
        }

        let rows = query
            .order_by_asc(classifications::Column::Id)
            .all(&self.db)
            .await?;

        debug!(classifications = rows.len(), "classifications loaded");
        rows.into_iter().map(classification_from_row).collect()
    }

    /// Queries active accounts of the given classifications, ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn query_accounts(
        &self,
        classification_ids: &[ClassificationId],
    ) -> Result<Vec<Account>, RepositoryError> {
        if classification_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = classification_ids.iter().map(|id| id.into_inner()).collect();
        let rows = coas::Entity::find()
            .filter(coas::Column::IsActive.eq(true))
            .filter(coas::Column::ClassificationId.is_in(ids))
            .order_by_asc(coas::Column::Code)
            .order_by_asc(coas::Column::Id)
            .all(&self.db)
            .await?;

        debug!(accounts = rows.len(), "accounts loaded");
        Ok(rows.into_iter().map(account_from_row).collect())
    }

    /// Sums debit and credit per account over the filtered journal lines.
    ///
    /// Accounts without a matching line are absent from the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn query_account_totals(
        &self,
        filter: &LedgerFilter,
    ) -> Result<BTreeMap<AccountId, AccountTotals>, RepositoryError> {
        let mut query = journal_details::Entity::find()
            .select_only()
            .column(journal_details::Column::CoaId)
            .column_as(journal_details::Column::Debit.sum(), "total_debit")
            .column_as(journal_details::Column::Credit.sum(), "total_credit")
            .join(
                JoinType::InnerJoin,
                journal_details::Relation::Journals.def(),
            )
            .join(JoinType::InnerJoin, journal_details::Relation::Coas.def())
            .join(JoinType::InnerJoin, coas::Relation::Classifications.def());

        if let Some(kind) = filter.classification_type {
            query = query.filter(classifications::Column::Kind.eq(kind.as_str()));
        }
        if let Some(id) = filter.classification_id {
            query = query.filter(coas::Column::ClassificationId.eq(id.into_inner()));
        }
        if let Some(from) = filter.date_from {
            query = query.filter(journals::Column::Date.gte(from));
        }
        if let Some(to) = filter.date_to {
            query = query.filter(journals::Column::Date.lte(to));
        }
        if let Some(department) = filter.department_id {
            query =
                query.filter(journal_details::Column::DepartmentId.eq(department.into_inner()));
        }
        if let Some(project) = filter.project_id {
            query = query.filter(journal_details::Column::ProjectId.eq(project.into_inner()));
        }

        let rows: Vec<AccountTotalsRow> = query
            .group_by(journal_details::Column::CoaId)
            .order_by_asc(journal_details::Column::CoaId)
            .into_model::<AccountTotalsRow>()
            .all(&self.db)
            .await?;

        debug!(accounts = rows.len(), "ledger aggregated");

        Ok(rows
            .into_iter()
            .map(|row| {
                (
                    AccountId::new(row.coa_id),
                    AccountTotals::new(
                        row.total_debit.unwrap_or_default(),
                        row.total_credit.unwrap_or_default(),
                    ),
                )
            })
            .collect())
    }
}

#[async_trait]
impl LedgerStore for ReportRepository {
    async fn classifications(
        &self,
        kind: Option<ClassificationType>,
        id: Option<ClassificationId>,
    ) -> Result<Vec<Classification>, StoreError> {
        Ok(self.query_classifications(kind, id).await?)
    }

    async fn accounts(
        &self,
        classification_ids: &[ClassificationId],
    ) -> Result<Vec<Account>, StoreError> {
        Ok(self.query_accounts(classification_ids).await?)
    }

    async fn aggregate(
        &self,
        filter: &LedgerFilter,
    ) -> Result<BTreeMap<AccountId, AccountTotals>, StoreError> {
        Ok(self.query_account_totals(filter).await?)
    }
}

fn classification_from_row(
    row: classifications::Model,
) -> Result<Classification, RepositoryError> {
    Ok(Classification {
        id: ClassificationId::new(row.id),
        name: row.name,
        kind: row.kind.parse()?,
        is_active: row.is_active,
    })
}

fn account_from_row(row: coas::Model) -> Account {
    Account {
        id: AccountId::new(row.id),
        parent_id: row.parent_id.map(AccountId::new),
        code: row.code,
        name: row.name,
        is_debit: row.is_debit,
        classification_id: ClassificationId::new(row.classification_id),
        is_active: row.is_active,
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
