//! Chart of accounts master data.
//!
//! Accounts form a parent/child forest and belong to exactly one
//! classification. Classifications decide which report an account feeds.

pub mod error;
pub mod types;

pub use error::CoaError;
pub use types::{Account, Classification, ClassificationType};
