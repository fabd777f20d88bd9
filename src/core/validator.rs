//! Row validation
//!
//! Turns a [`RawRow`] into a [`ValidatedRow`] or the first [`RejectReason`]
//! that applies. Checks run in a fixed priority order and return early, so a
//! row with several bad fields always reports the same reason:
//!
//! 1. `order_id` present and non-blank
//! 2. `sku` present and non-blank
//! 3. `sku` matches `^SKU-[A-Z0-9]+$`
//! 4. `quantity` present and non-blank
//! 5. `quantity` is a number
//! 6. `price` present and non-blank
//! 7. `price` is a number
//! 8. `price` is non-negative
//!
//! Validation is pure; refund matching happens in the ledger.
//!
//! A well-formed number too large for a decimal is not a rejection: the row is
//! valid but cannot be settled, which the processor treats as fatal.

use crate::types::row::{ORDER_ID, PRICE, QUANTITY, SKU};
use crate::types::{RawRow, RejectReason, ValidatedRow};
use regex::Regex;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

static SKU_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^SKU-[A-Z0-9]+$").expect("sku pattern is a valid regex"));

/// A parsed number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Decimal(Decimal),
    /// Well-formed, but its magnitude exceeds the decimal range
    OutOfRange { negative: bool },
}

impl Number {
    /// Whether the number is below zero (negative zero is not)
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Decimal(value) => value.is_sign_negative() && !value.is_zero(),
            Number::OutOfRange { negative } => *negative,
        }
    }

    fn into_decimal(self, field: &'static str) -> Result<Decimal, ValidationError> {
        match self {
            Number::Decimal(value) => Ok(value),
            Number::OutOfRange { .. } => Err(ValidationError::OutOfRange { field }),
        }
    }
}

/// Why a row did not validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The row is rejected and reported in `failed_rows`
    Rejected(RejectReason),
    /// The row passed every check but `field` does not fit a decimal
    OutOfRange { field: &'static str },
}

impl From<RejectReason> for ValidationError {
    fn from(reason: RejectReason) -> Self {
        ValidationError::Rejected(reason)
    }
}

/// Validate a raw row
///
/// # Returns
///
/// * `Ok(ValidatedRow)` with trimmed `order_id`/`sku` and parsed numbers
/// * `Err(ValidationError::Rejected)` for the first failing check
/// * `Err(ValidationError::OutOfRange)` for a valid row with a number beyond
///   the decimal range
pub fn validate_row(row: &RawRow) -> Result<ValidatedRow, ValidationError> {
    let order_id = required(row, ORDER_ID).ok_or(RejectReason::MissingOrderId)?;

    let sku = required(row, SKU).ok_or(RejectReason::MissingSku)?;
    if !is_valid_sku(sku) {
        return Err(RejectReason::InvalidSku.into());
    }

    let quantity = required(row, QUANTITY).ok_or(RejectReason::MissingQuantity)?;
    let quantity = parse_number(quantity).ok_or(RejectReason::QuantityNotNumber)?;

    let price = required(row, PRICE).ok_or(RejectReason::MissingPrice)?;
    let price = parse_number(price).ok_or(RejectReason::PriceNotNumber)?;
    if price.is_negative() {
        return Err(RejectReason::NegativePrice.into());
    }

    Ok(ValidatedRow {
        order_id: order_id.to_string(),
        sku: sku.to_string(),
        quantity: quantity.into_decimal(QUANTITY)?,
        price: price.into_decimal(PRICE)?,
    })
}

/// Whether `sku` is `SKU-` followed by one or more uppercase letters or digits
pub fn is_valid_sku(sku: &str) -> bool {
    SKU_PATTERN.is_match(sku)
}

/// Parse a real number in plain or scientific notation
///
/// Accepts an optional sign and an optional fractional part (`3`, `-2`,
/// `+1.5`, `1e3`). Non-finite spellings such as `nan` or `inf` are
/// not numbers.
///
/// Values the decimal type cannot hold exactly still parse: digits past its
/// precision are rounded, magnitudes below its smallest step become zero and
/// larger ones are [`Number::OutOfRange`].
pub fn parse_number(raw: &str) -> Option<Number> {
    let raw = raw.trim();
    if let Ok(value) = Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
        return Some(Number::Decimal(value));
    }

    let value = raw.parse::<f64>().ok().filter(|value| value.is_finite())?;
    match Decimal::from_f64(value) {
        Some(decimal) => Some(Number::Decimal(decimal)),
        None if value.abs() < 1.0 => Some(Number::Decimal(Decimal::ZERO)),
        None => Some(Number::OutOfRange {
            negative: value.is_sign_negative(),
        }),
    }
}

// Trimmed field value, or None if absent or blank
fn required<'a>(row: &'a RawRow, name: &str) -> Option<&'a str> {
    row.get(name).map(str::trim).filter(|value| !value.is_empty())
}
