//! Financial report generation.
//!
//! This module provides pure business logic for generating financial reports:
//! - Account trees with parent/child rollups
//! - Classification sections
//! - Profit & Loss
//! - Balance Sheet
//! - Trial Balance

pub mod assembler;
pub mod error;
pub mod generator;
pub mod service;
pub mod store;
pub mod tree;
pub mod types;


pub use assembler::assemble_sections;
pub use error::{ReportError, StoreError};
pub use generator::ReportGenerator;
pub use service::{ReportData, ReportService};
pub use store::{LedgerStore, MemoryLedger};
pub use tree::build_tree;
pub use types::*;
