//! Repository layer for database operations.

pub mod report;

pub use report::{ReportRepository, RepositoryError};
