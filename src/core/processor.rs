//! Row processor
//!
//! Folds an ordered sequence of raw rows into a [`Report`]. Every row is either
//! accepted, contributing once to revenue and item totals, or rejected,
//! contributing exactly one [`FailedRow`] and nothing else.
//!
//! Rows must be fed in file order: refunds are only valid against purchases
//! that came earlier. All state lives in the processor, which is created fresh
//! for each run.
//!
//! Arithmetic is exact. A row whose revenue or totals would leave the decimal
//! range is a fatal [`ReportError::ArithmeticOverflow`]; the row's effects are
//! not applied and the run must stop.

use crate::core::item_totals::ItemTotals;
use crate::core::ledger::RefundLedger;
use crate::core::validator::{validate_row, ValidationError};
use crate::types::{FailedRow, RawRow, RejectReason, Report, ReportError, ValidatedRow};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Line number of the first data row (the header is line 1)
pub const FIRST_DATA_LINE: u64 = 2;

/// Outcome of processing one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted,
    Rejected(RejectReason),
}

/// Single-run row processor
///
/// Owns the refund ledger, the item totals, the running revenue and the
/// failed rows collected so far.
pub struct RowProcessor {
    ledger: RefundLedger,
    items: ItemTotals,
    total_revenue: Decimal,
    failed_rows: Vec<FailedRow>,
    accepted_rows: usize,
    next_line: u64,
}

impl RowProcessor {
    /// Create a processor with empty state
    pub fn new() -> Self {
        RowProcessor {
            ledger: RefundLedger::new(),
            items: ItemTotals::new(),
            total_revenue: Decimal::ZERO,
            failed_rows: Vec::new(),
            accepted_rows: 0,
            next_line: FIRST_DATA_LINE,
        }
    }

    /// Process the next row in file order
    ///
    /// The row is assigned the next line number. A rejected row is recorded
    /// in the failed rows together with its raw data.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the row cannot be settled within the
    /// decimal range. The processor state is unchanged apart from the line
    /// number.
    pub fn process(&mut self, row: RawRow) -> Result<RowOutcome, ReportError> {
        let line = self.next_line;
        self.next_line += 1;

        let settled = match validate_row(&row) {
            Ok(validated) => self.settle(line, validated)?,
            Err(ValidationError::Rejected(reason)) => Err(reason),
            Err(ValidationError::OutOfRange { field }) => {
                return Err(ReportError::arithmetic_overflow(line, field));
            }
        };

        match settled {
            Ok(()) => {
                self.accepted_rows += 1;
                Ok(RowOutcome::Accepted)
            }
            Err(reason) => {
                debug!(line, reason = reason.code(), "Row rejected");
                self.failed_rows.push(FailedRow {
                    line,
                    reason,
                    row_data: row,
                });
                Ok(RowOutcome::Rejected(reason))
            }
        }
    }

    /// Process every row, then build the report
    ///
    /// # Errors
    ///
    /// Stops at the first row that overflows.
    pub fn process_all<I>(mut self, rows: I) -> Result<Report, ReportError>
    where
        I: IntoIterator<Item = RawRow>,
    {
        for row in rows {
            self.process(row)?;
        }
        Ok(self.finish())
    }

    /// Running revenue over the rows accepted so far (unrounded)
    pub fn total_revenue(&self) -> Decimal {
        self.total_revenue
    }

    /// The refund ledger as it stands
    pub fn ledger(&self) -> &RefundLedger {
        &self.ledger
    }

    /// Consume the processor and build the report
    pub fn finish(self) -> Report {
        let best_selling_sku = self.items.best_seller();

        info!(
            accepted = self.accepted_rows,
            rejected = self.failed_rows.len(),
            total_revenue = %self.total_revenue,
            best_selling_sku = %best_selling_sku.sku,
            "Processing complete"
        );

        Report {
            total_revenue: self.total_revenue,
            best_selling_sku,
            failed_rows: self.failed_rows,
            accepted_rows: self.accepted_rows,
        }
    }

    /// Apply purchase/refund rules and, on success, count the row
    ///
    /// The outer error is fatal, the inner one a rejection. Everything is
    /// checked before any state changes.
    fn settle(
        &mut self,
        line: u64,
        row: ValidatedRow,
    ) -> Result<Result<(), RejectReason>, ReportError> {
        let key = row.ledger_key();
        if let Err(reason) = self.ledger.check(&key, row.quantity) {
            return Ok(Err(reason));
        }

        let overflow = |operation: &'static str| ReportError::arithmetic_overflow(line, operation);
        let revenue = row.revenue().ok_or_else(|| overflow("revenue"))?;
        let total_revenue = self
            .total_revenue
            .checked_add(revenue)
            .ok_or_else(|| overflow("total revenue"))?;
        let item_total = self
            .items
            .checked_total(&row.sku, row.quantity)
            .ok_or_else(|| overflow("item total"))?;

        // A zero quantity is accepted without touching the ledger
        self.ledger.record(key, row.quantity);
        self.items.set_total(&row.sku, item_total);
        self.total_revenue = total_revenue;
        Ok(Ok(()))
    }
}

impl Default for RowProcessor {
    fn default() -> Self {
        Self::new()
    }
}
