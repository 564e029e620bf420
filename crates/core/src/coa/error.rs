//! Chart of accounts error types.

use thiserror::Error;

/// Errors raised while interpreting chart of accounts master data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoaError {
    /// Classification type string is neither `profit-loss` nor `balance-sheet`.
    #[error("Unknown classification type: {0}")]
    UnknownClassificationType(String),
}
