//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `row`: Raw and validated input rows, ledger keys
//! - `report`: The report produced by a run
//! - `error`: Row rejection reasons and fatal errors

pub mod error;
pub mod report;
pub mod row;

pub use error::{RejectReason, ReportError};
pub use report::{BestSeller, FailedRow, Report};
pub use row::{LedgerKey, RawRow, ValidatedRow};
