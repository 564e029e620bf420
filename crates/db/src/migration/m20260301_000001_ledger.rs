//! Ledger schema: chart of accounts, dimensions and posted journals.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(MASTER_DATA_SQL).await?;
        db.execute_unprepared(JOURNALS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const MASTER_DATA_SQL: &str = r"
CREATE TABLE classifications (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    type VARCHAR(20) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT true,
    CONSTRAINT chk_classification_type CHECK (type IN ('profit-loss', 'balance-sheet'))
);

CREATE TABLE coas (
    id BIGSERIAL PRIMARY KEY,
    parent_id BIGINT REFERENCES coas(id) ON DELETE SET NULL,
    classification_id BIGINT NOT NULL REFERENCES classifications(id),
    code VARCHAR(50) NOT NULL,
    name VARCHAR(255) NOT NULL,
    is_debit BOOLEAN NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT true,
    CONSTRAINT chk_coa_not_own_parent CHECK (parent_id IS NULL OR parent_id <> id)
);

-- Report loading: accounts of a classification in code order
CREATE INDEX idx_coas_classification ON coas(classification_id, code) WHERE is_active;
CREATE INDEX idx_coas_parent ON coas(parent_id);

CREATE TABLE departments (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL
);

CREATE TABLE projects (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL
);
";

const JOURNALS_SQL: &str = r"
CREATE TABLE journals (
    id BIGSERIAL PRIMARY KEY,
    date DATE NOT NULL,
    description TEXT
);

CREATE INDEX idx_journals_date ON journals(date);

CREATE TABLE journal_details (
    id BIGSERIAL PRIMARY KEY,
    journal_id BIGINT NOT NULL REFERENCES journals(id) ON DELETE CASCADE,
    coa_id BIGINT NOT NULL REFERENCES coas(id),
    debit NUMERIC(20, 2) NOT NULL DEFAULT 0,
    credit NUMERIC(20, 2) NOT NULL DEFAULT 0,
    department_id BIGINT REFERENCES departments(id),
    project_id BIGINT REFERENCES projects(id),
    CONSTRAINT chk_non_negative CHECK (debit >= 0 AND credit >= 0)
);

-- Aggregation: SUM(debit), SUM(credit) GROUP BY coa_id
CREATE INDEX idx_journal_details_coa ON journal_details(coa_id);
CREATE INDEX idx_journal_details_journal ON journal_details(journal_id);
CREATE INDEX idx_journal_details_department ON journal_details(department_id)
    WHERE department_id IS NOT NULL;
CREATE INDEX idx_journal_details_project ON journal_details(project_id)
    WHERE project_id IS NOT NULL;
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS journal_details CASCADE;
DROP TABLE IF EXISTS journals CASCADE;
DROP TABLE IF EXISTS projects CASCADE;
DROP TABLE IF EXISTS departments CASCADE;
DROP TABLE IF EXISTS coas CASCADE;
DROP TABLE IF EXISTS classifications CASCADE;
";
