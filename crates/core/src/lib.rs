//! Financial reporting engine for Neraca.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! The ledger store is reached through the [`reports::LedgerStore`] trait.
//!
//! # Modules
//!
//! - `coa` - Chart of accounts and classification master data
//! - `ledger` - Journal lines, filtering, aggregation and account polarity
//! - `reports` - Account trees, classification sections, Profit & Loss,
//!   Balance Sheet and Trial Balance

pub mod coa;
pub mod ledger;
pub mod reports;
