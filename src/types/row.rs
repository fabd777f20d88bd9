//! Row-level types for the order report
//!
//! This module defines the raw row as read from the input, the validated row
//! produced by the validator, and the key used to match refunds to purchases.

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field name of the order identifier column
pub const ORDER_ID: &str = "order_id";
/// Field name of the item identifier column
pub const SKU: &str = "sku";
/// Field name of the quantity column
pub const QUANTITY: &str = "quantity";
/// Field name of the unit price column
pub const PRICE: &str = "price";

/// A single input row, exactly as read
///
/// Holds every header column in header order. Values are kept untrimmed so the
/// row can be echoed back verbatim in `failed_rows[].row_data`. A column the
/// row is too short to reach is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<(String, Option<String>)>,
}

impl RawRow {
    /// Build a row from header names and the record's fields
    ///
    /// Fields past the header width have no column name and are dropped.
    /// Header columns past the end of the record are recorded as absent.
    pub fn from_record<'a, H, F>(headers: H, fields: F) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        F: IntoIterator<Item = &'a str>,
    {
        let mut values = fields.into_iter();
        let fields = headers
            .into_iter()
            .map(|name| (name.to_string(), values.next().map(str::to_string)))
            .collect();

        RawRow { fields }
    }

    /// Build a row from `(name, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        RawRow {
            fields: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.map(Into::into)))
                .collect(),
        }
    }

    /// Look up a field's raw value by column name
    ///
    /// Returns `None` if the column is missing from the header or the row
    /// was too short to reach it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Iterate over `(column name, raw value)` pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}

impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A row that passed every syntactic check
///
/// `order_id` and `sku` are trimmed. `price` is never negative. The sign of
/// `quantity` separates purchases (positive) from refunds (negative).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRow {
    pub order_id: String,
    pub sku: String,
    pub quantity: Decimal,
    pub price: Decimal,
}

impl ValidatedRow {
    /// The line-item key this row is matched under
    pub fn ledger_key(&self) -> LedgerKey {
        LedgerKey::new(&self.order_id, &self.sku, self.price)
    }

    /// Revenue contributed by this row (`quantity * price`), or None on overflow
    pub fn revenue(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.price)
    }
}

/// Identity of a line item for refund matching: `(order_id, sku, price)`
///
/// The price is normalized, so `120` and `120.0` name the same line item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LedgerKey {
    pub order_id: String,
    pub sku: String,
    pub price: Decimal,
}

impl LedgerKey {
    pub fn new(order_id: &str, sku: &str, price: Decimal) -> Self {
        LedgerKey {
            order_id: order_id.to_string(),
            sku: sku.to_string(),
            price: price.normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn header() -> Vec<&'static str> {
        vec![ORDER_ID, SKU, QUANTITY, PRICE]
    }

    #[test]
    fn test_from_record_keeps_raw_values() {
        let row = RawRow::from_record(header(), vec![" 1001 ", "SKU-A1", "2", "50.0"]);

        assert_eq!(row.get(ORDER_ID), Some(" 1001 "));
        assert_eq!(row.get(SKU), Some("SKU-A1"));
        assert_eq!(row.get(QUANTITY), Some("2"));
        assert_eq!(row.get(PRICE), Some("50.0"));
    }

    #[rstest]
    #[case::short_row(vec!["1001", "SKU-A1"], None)]
    #[case::empty_value(vec!["1001", "SKU-A1", "2", ""], Some(""))]
    #[case::full_row(vec!["1001", "SKU-A1", "2", "5"], Some("5"))]
    fn test_price_lookup(#[case] fields: Vec<&str>, #[case] expected: Option<&str>) {
        let row = RawRow::from_record(header(), fields);
        assert_eq!(row.get(PRICE), expected);
    }

    #[test]
    fn test_missing_column_is_absent() {
        let row = RawRow::from_record(vec![ORDER_ID, SKU], vec!["1001", "SKU-A1"]);
        assert_eq!(row.get(QUANTITY), None);
    }

    #[test]
    fn test_overflow_fields_are_dropped() {
        let row = RawRow::from_record(vec![ORDER_ID], vec!["1001", "extra"]);
        assert_eq!(row.iter().count(), 1);
    }

    #[test]
    fn test_serializes_in_header_order_with_nulls() {
        let row = RawRow::from_record(header(), vec!["1001", "SKU-A1"]);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"order_id":"1001","sku":"SKU-A1","quantity":null,"price":null}"#
        );
    }

    #[test]
    fn test_ledger_key_normalizes_price() {
        let a = LedgerKey::new("1005", "SKU-B456", Decimal::new(1200, 1));
        let b = LedgerKey::new("1005", "SKU-B456", Decimal::new(120, 0));
        assert_eq!(a, b);
    }
}
