//! Core business logic module
//!
//! This module contains the row processing components:
//! - `validator` - Field checks in fixed priority order
//! - `ledger` - Refund matching and duplicate purchase detection
//! - `item_totals` - Per-sku quantity totals and best-seller selection
//! - `processor` - Per-run fold of rows into a report

pub mod item_totals;
pub mod ledger;
pub mod processor;
pub mod validator;

pub use item_totals::ItemTotals;
pub use ledger::RefundLedger;
pub use processor::{RowOutcome, RowProcessor};
pub use validator::{parse_number, validate_row, Number, ValidationError};
