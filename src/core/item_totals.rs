//! Per-item quantity totals and best-seller selection

use crate::types::BestSeller;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Signed cumulative quantity per sku
///
/// Remembers the order in which skus first appeared so that ties for best
/// seller always resolve to the earliest sku, independent of hash order.
#[derive(Debug, Default)]
pub struct ItemTotals {
    totals: HashMap<String, Decimal>,
    first_seen: Vec<String>,
}

impl ItemTotals {
    pub fn new() -> Self {
        ItemTotals::default()
    }

    /// The sku's total after adding `quantity` (which may be negative)
    ///
    /// Returns None on overflow. Nothing changes until [`ItemTotals::set_total`].
    pub fn checked_total(&self, sku: &str, quantity: Decimal) -> Option<Decimal> {
        self.total(sku).checked_add(quantity)
    }

    /// Set the sku's total, remembering when it first appeared
    pub fn set_total(&mut self, sku: &str, total: Decimal) {
        match self.totals.get_mut(sku) {
            Some(current) => *current = total,
            None => {
                self.totals.insert(sku.to_string(), total);
                self.first_seen.push(sku.to_string());
            }
        }
    }

    /// Cumulative quantity for a sku (zero if never seen)
    pub fn total(&self, sku: &str) -> Decimal {
        self.totals.get(sku).copied().unwrap_or(Decimal::ZERO)
    }

    /// The sku with the highest total, earliest first appearance on ties
    ///
    /// Returns an empty sku with zero quantity when nothing was added. The
    /// quantity is truncated toward zero.
    pub fn best_seller(&self) -> BestSeller {
        let mut best: Option<(&str, Decimal)> = None;

        for sku in &self.first_seen {
            let total = self.total(sku);
            if best.map_or(true, |(_, best_total)| total > best_total) {
                best = Some((sku, total));
            }
        }

        match best {
            Some((sku, total)) => BestSeller {
                sku: sku.to_string(),
                total_quantity: truncate_quantity(total),
            },
            None => BestSeller::default(),
        }
    }
}

fn truncate_quantity(total: Decimal) -> i64 {
    total.trunc().to_i64().unwrap_or(if total.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
