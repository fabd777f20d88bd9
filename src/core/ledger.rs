//! Refund ledger
//!
//! Tracks, per line item `(order_id, sku, price)`, how much purchased quantity
//! is still available to refund, and which line items have already had a
//! purchase accepted.
//!
//! # Rules
//!
//! - A purchase for a line item that already has an accepted purchase is a
//!   duplicate and is rejected.
//! - A refund needs a positive remaining balance for its line item and may not
//!   exceed it. A refund equal to the balance brings it to zero.
//!
//! Checking is separate from recording, so a caller can reject or abort a row
//! before anything is recorded. Rejected rows leave the ledger untouched. Nothing is ever undone, so
//! a refund rejected before its purchase stays rejected even once the purchase
//! arrives.

use crate::types::{LedgerKey, RejectReason};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

/// Per-run refund ledger
#[derive(Debug, Default)]
pub struct RefundLedger {
    /// Remaining refundable quantity per line item
    remaining: HashMap<LedgerKey, Decimal>,
    /// Line items with an accepted purchase
    purchased: HashSet<LedgerKey>,
}

impl RefundLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        RefundLedger::default()
    }

    /// Check whether a row of `quantity` units may be settled
    ///
    /// A positive quantity is a purchase, a negative one a refund of its
    /// absolute value. Zero always passes.
    ///
    /// # Errors
    ///
    /// - `DuplicateOrderLine` if a purchase repeats an accepted purchase
    /// - `RefundBeforePurchase` if nothing remains to refund for the line item
    /// - `RefundExceeds` if the refund is larger than what remains
    pub fn check(&self, key: &LedgerKey, quantity: Decimal) -> Result<(), RejectReason> {
        if quantity > Decimal::ZERO {
            if self.purchased.contains(key) {
                return Err(RejectReason::DuplicateOrderLine);
            }
        } else if quantity < Decimal::ZERO {
            let available = self.remaining(key);
            if available <= Decimal::ZERO {
                return Err(RejectReason::RefundBeforePurchase);
            }
            if quantity.abs() > available {
                return Err(RejectReason::RefundExceeds);
            }
        }
        Ok(())
    }

    /// Record a row that passed [`RefundLedger::check`]
    ///
    /// A purchase opens the line item's balance; a refund draws it down.
    pub(crate) fn record(&mut self, key: LedgerKey, quantity: Decimal) {
        if quantity > Decimal::ZERO {
            self.remaining.insert(key.clone(), quantity);
            self.purchased.insert(key);
        } else if let Some(available) = self.remaining.get_mut(&key) {
            *available -= quantity.abs();
        }
    }

    /// Remaining refundable quantity for a line item (zero if never purchased)
    pub fn remaining(&self, key: &LedgerKey) -> Decimal {
        self.remaining.get(key).copied().unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(order_id: &str) -> LedgerKey {
        LedgerKey::new(order_id, "SKU-A1", Decimal::new(500, 1))
    }

    fn qty(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    fn settle(
        ledger: &mut RefundLedger,
        key: LedgerKey,
        quantity: Decimal,
    ) -> Result<(), RejectReason> {
        ledger.check(&key, quantity)?;
        ledger.record(key, quantity);
        Ok(())
    }

    #[test]
    fn test_purchase_sets_remaining() {
        let mut ledger = RefundLedger::new();
        settle(&mut ledger, key("1"), qty(3)).unwrap();

        assert_eq!(ledger.remaining(&key("1")), qty(3));
    }

    #[test]
    fn test_duplicate_purchase_rejected_without_change() {
        let mut ledger = RefundLedger::new();
        settle(&mut ledger, key("1"), qty(3)).unwrap();

        assert_eq!(
            settle(&mut ledger, key("1"), qty(5)),
            Err(RejectReason::DuplicateOrderLine)
        );
        assert_eq!(ledger.remaining(&key("1")), qty(3));
    }

    #[test]
    fn test_duplicate_does_not_block_refund() {
        let mut ledger = RefundLedger::new();
        settle(&mut ledger, key("1"), qty(3)).unwrap();
        let _ = settle(&mut ledger, key("1"), qty(3));

        assert_eq!(settle(&mut ledger, key("1"), qty(-3)), Ok(()));
        assert_eq!(ledger.remaining(&key("1")), Decimal::ZERO);
    }

    #[test]
    fn test_refund_before_purchase() {
        let mut ledger = RefundLedger::new();
        assert_eq!(
            settle(&mut ledger, key("1"), qty(-1)),
            Err(RejectReason::RefundBeforePurchase)
        );
        assert_eq!(ledger.remaining(&key("1")), Decimal::ZERO);
    }

    #[test]
    fn test_refund_exceeds_remaining() {
        let mut ledger = RefundLedger::new();
        settle(&mut ledger, key("1"), qty(2)).unwrap();

        assert_eq!(
            settle(&mut ledger, key("1"), qty(-3)),
            Err(RejectReason::RefundExceeds)
        );
        assert_eq!(ledger.remaining(&key("1")), qty(2));
    }

    #[test]
    fn test_partial_refunds_until_exhausted() {
        let mut ledger = RefundLedger::new();
        settle(&mut ledger, key("1"), qty(3)).unwrap();

        assert_eq!(settle(&mut ledger, key("1"), qty(-1)), Ok(()));
        assert_eq!(settle(&mut ledger, key("1"), qty(-2)), Ok(()));
        // Balance is now zero, which reads as "nothing purchased"
        assert_eq!(
            settle(&mut ledger, key("1"), qty(-1)),
            Err(RejectReason::RefundBeforePurchase)
        );
    }

    #[test]
    fn test_check_leaves_ledger_untouched() {
        let mut ledger = RefundLedger::new();
        settle(&mut ledger, key("1"), qty(2)).unwrap();

        assert_eq!(ledger.check(&key("1"), qty(-2)), Ok(()));
        assert_eq!(ledger.check(&key("2"), qty(4)), Ok(()));
        assert_eq!(ledger.remaining(&key("1")), qty(2));
        assert_eq!(ledger.remaining(&key("2")), Decimal::ZERO);
    }

    #[test]
    fn test_large_quantities_settle_exactly() {
        let mut ledger = RefundLedger::new();
        let max = Decimal::MAX;
        settle(&mut ledger, key("1"), max).unwrap();

        assert_eq!(settle(&mut ledger, key("1"), -max), Ok(()));
        assert_eq!(ledger.remaining(&key("1")), Decimal::ZERO);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut ledger = RefundLedger::new();
        settle(&mut ledger, key("1"), qty(2)).unwrap();

        assert_eq!(
            settle(&mut ledger, key("2"), qty(-1)),
            Err(RejectReason::RefundBeforePurchase)
        );
    }
}
