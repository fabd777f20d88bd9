//! Orders Report Library
//! # Overview
//!
//! This library validates order rows read from a CSV file and aggregates them
//! into a report: total revenue, the best selling sku, and every rejected row
//! with its reason.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (rows, report, errors)
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - Field checks in priority order
//!   - [`core::ledger`] - Refund matching and duplicate detection
//!   - [`core::item_totals`] - Per-sku totals and best-seller selection
//!   - [`core::processor`] - The per-run fold over rows
//! - [`io`] - CSV readers and JSON output
//! - [`strategy`] - Sync and async reading pipelines
//!
//! # Row Rules
//!
//! - A row with a positive quantity is a **purchase**. A second purchase for the
//!   same `(order_id, sku, price)` is a duplicate and is rejected.
//! - A row with a negative quantity is a **refund**. It must follow a purchase
//!   of the same `(order_id, sku, price)` and may not exceed the quantity still
//!   left to refund.
//! - Accepted rows add `quantity * price` to revenue and `quantity` to the
//!   sku's total. Rejected rows add nothing.
//!
//! # Example
//!
//! ```
//! use orders_report::core::RowProcessor;
//! use orders_report::types::RawRow;
//!
//! let rows = vec![
//!     RawRow::from_pairs([("order_id", Some("1")), ("sku", Some("SKU-A1")), ("quantity", Some("2")), ("price", Some("5"))]),
//!     RawRow::from_pairs([("order_id", Some("1")), ("sku", Some("SKU-A1")), ("quantity", Some("-1")), ("price", Some("5"))]),
//! ];
//! let report = RowProcessor::new().process_all(rows).unwrap();
//! assert_eq!(report.total_revenue.to_string(), "5");
//! assert_eq!(report.best_selling_sku.total_quantity, 1);
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use self::core::{RefundLedger, RowProcessor};
pub use io::write_report;
pub use types::{BestSeller, FailedRow, RawRow, RejectReason, Report, ReportError};
