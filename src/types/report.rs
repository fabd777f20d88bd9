//! Report types produced by a processing run

use super::error::RejectReason;
use super::row::RawRow;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// A rejected row
///
/// `line` counts the header as line 1, so the first data row is line 2.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedRow {
    pub line: u64,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: RejectReason,
    pub row_data: RawRow,
}

/// The item with the highest cumulative quantity
///
/// An empty `sku` with zero quantity means no row was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BestSeller {
    pub sku: String,
    pub total_quantity: i64,
}

/// Result of one processing run
///
/// `total_revenue` keeps full precision; it is rounded to two decimal places
/// only when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(serialize_with = "serialize_revenue")]
    pub total_revenue: Decimal,
    pub best_selling_sku: BestSeller,
    pub failed_rows: Vec<FailedRow>,
    /// Number of rows that were accepted
    #[serde(skip)]
    pub accepted_rows: usize,
}

impl Report {
    /// Total number of data rows classified in this run
    pub fn total_rows(&self) -> usize {
        self.accepted_rows + self.failed_rows.len()
    }
}

/// Round revenue half-to-even at two decimal places and emit it as a JSON number
fn serialize_revenue<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let rounded = value
        .round_dp(2)
        .to_f64()
        .ok_or_else(|| {
            <S::Error as serde::ser::Error>::custom(format!("revenue {} is out of range", value))
        })?;
    serializer.serialize_f64(rounded)
}

fn serialize_reason<S: Serializer>(
    reason: &RejectReason,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}
