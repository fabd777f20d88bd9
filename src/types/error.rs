//! Error types for the order report
//!
//! Two kinds of failure exist:
//!
//! - **Row rejections** ([`RejectReason`]): a single row is invalid or cannot be
//!   matched. These never abort the run; they are collected into `failed_rows`.
//! - **Fatal errors** ([`ReportError`]): the input cannot be opened or read, or
//!   the report cannot be written, or a row's arithmetic overflows. The run
//!   stops and no JSON is emitted.

use thiserror::Error;

/// Reason a row was rejected
///
/// Variants are listed in the order the validator checks them, followed by the
/// ledger rejections. `Display` yields the fixed message reported in
/// `failed_rows[].reason`; [`RejectReason::code`] yields the stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RejectReason {
    #[error("Missing order_id.")]
    MissingOrderId,

    #[error("Missing sku.")]
    MissingSku,

    #[error("sku does not match required format SKU-XXX.")]
    InvalidSku,

    #[error("Missing quantity.")]
    MissingQuantity,

    #[error("quantity is not a number.")]
    QuantityNotNumber,

    #[error("Missing price.")]
    MissingPrice,

    #[error("price is not a number.")]
    PriceNotNumber,

    #[error("price must be non-negative.")]
    NegativePrice,

    /// A second purchase row for the same `(order_id, sku, price)`
    #[error("Duplicate (order_id, sku, price) with positive quantity.")]
    DuplicateOrderLine,

    /// A refund with nothing left to refund against
    #[error("Refund row must appear after the purchase row")]
    RefundBeforePurchase,

    /// A refund larger than the remaining purchased quantity
    #[error("Refund quantity exceeds original purchase quantity.")]
    RefundExceeds,
}

impl RejectReason {
    /// Stable identifier of the reason, e.g. `MISSING_ORDER_ID`
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::MissingOrderId => "MISSING_ORDER_ID",
            RejectReason::MissingSku => "MISSING_SKU",
            RejectReason::InvalidSku => "INVALID_SKU",
            RejectReason::MissingQuantity => "MISSING_QUANTITY",
            RejectReason::QuantityNotNumber => "QUANTITY_NOT_NUMBER",
            RejectReason::MissingPrice => "MISSING_PRICE",
            RejectReason::PriceNotNumber => "PRICE_NOT_NUMBER",
            RejectReason::NegativePrice => "NEGATIVE_PRICE",
            RejectReason::DuplicateOrderLine => "DUPLICATE_ORDER_LINE",
            RejectReason::RefundBeforePurchase => "REFUND_BEFORE_PURCHASE",
            RejectReason::RefundExceeds => "REFUND_EXCEEDS",
        }
    }
}

/// Fatal error for a report run
///
/// Any of these stops processing. The binary prints the message to stderr
/// and exits with status 1.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading the input or writing the report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The CSV reader could not read a record
    ///
    /// Covers faults such as invalid UTF-8. Malformed field values are not CSV
    /// errors; they become row rejections.
    #[error("CSV read error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    CsvError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the read error
        message: String,
    },

    /// A row's arithmetic exceeds the decimal range
    ///
    /// Raised for a row that passed every check but cannot be settled
    /// exactly, before any of its effects are applied.
    #[error("Arithmetic overflow in {operation} at line {line}")]
    ArithmeticOverflow {
        /// Line of the row being settled
        line: u64,
        /// Operation that would overflow
        operation: String,
    },

    /// The report could not be serialized
    #[error("Failed to serialize report: {message}")]
    SerializeError { message: String },

    /// The async runtime could not be started
    #[error("Failed to create tokio runtime: {message}")]
    RuntimeError { message: String },
}

impl ReportError {
    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(line: u64, operation: &str) -> Self {
        ReportError::ArithmeticOverflow {
            line,
            operation: operation.to_string(),
        }
    }

    /// Create an error for a failed open, distinguishing a missing file
    pub fn open_failed(path: &std::path::Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => ReportError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ReportError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), error),
            },
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ReportError::CsvError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for ReportError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ReportError::CsvError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::SerializeError {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::missing_order_id(RejectReason::MissingOrderId, "MISSING_ORDER_ID", "Missing order_id.")]
    #[case::invalid_sku(
        RejectReason::InvalidSku,
        "INVALID_SKU",
        "sku does not match required format SKU-XXX."
    )]
    #[case::price_not_number(RejectReason::PriceNotNumber, "PRICE_NOT_NUMBER", "price is not a number.")]
    #[case::duplicate(
        RejectReason::DuplicateOrderLine,
        "DUPLICATE_ORDER_LINE",
        "Duplicate (order_id, sku, price) with positive quantity."
    )]
    #[case::refund_before_purchase(
        RejectReason::RefundBeforePurchase,
        "REFUND_BEFORE_PURCHASE",
        "Refund row must appear after the purchase row"
    )]
    #[case::refund_exceeds(
        RejectReason::RefundExceeds,
        "REFUND_EXCEEDS",
        "Refund quantity exceeds original purchase quantity."
    )]
    fn test_reject_reason_code_and_message(
        #[case] reason: RejectReason,
        #[case] code: &str,
        #[case] message: &str,
    ) {
        assert_eq!(reason.code(), code);
        assert_eq!(reason.to_string(), message);
    }

    #[rstest]
    #[case::file_not_found(
        ReportError::FileNotFound { path: "orders.csv".to_string() },
        "File not found: orders.csv"
    )]
    #[case::io_error(
        ReportError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::csv_error_with_line(
        ReportError::CsvError { line: Some(7), message: "invalid utf-8".to_string() },
        "CSV read error at line 7: invalid utf-8"
    )]
    #[case::arithmetic_overflow(
        ReportError::arithmetic_overflow(4, "revenue"),
        "Arithmetic overflow in revenue at line 4"
    )]
    #[case::csv_error_without_line(
        ReportError::CsvError { line: None, message: "invalid utf-8".to_string() },
        "CSV read error: invalid utf-8"
    )]
    fn test_report_error_display(#[case] error: ReportError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_open_failed_not_found() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = ReportError::open_failed(Path::new("missing.csv"), io_error);
        assert_eq!(
            error,
            ReportError::FileNotFound {
                path: "missing.csv".to_string()
            }
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: ReportError = io_error.into();
        assert!(matches!(error, ReportError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
