//! Checkout receipts and order numbers.

use chrono::{DateTime, Utc};
use marigold_core::CartEntry;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;

/// Prefix of every storefront order number.
pub const ORDER_PREFIX: &str = "#TUT";

/// Snapshot of a completed checkout.
///
/// Captured before the cart is cleared, so the entry list and total reflect
/// exactly what the customer paid for.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Order number, `#TUT` followed by a four-digit code.
    pub order_number: String,
    /// Grand total paid, sum of line subtotals.
    pub total: Decimal,
    /// The lines paid for, in cart order.
    pub entries: Vec<CartEntry>,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl Receipt {
    pub(crate) fn capture(entries: Vec<CartEntry>) -> Self {
        let total = entries.iter().map(CartEntry::line_subtotal).sum();
        Self {
            order_number: order_number(),
            total,
            entries,
            placed_at: Utc::now(),
        }
    }
}

/// Generate a fresh order number: [`ORDER_PREFIX`] plus a random four-digit
/// code.
#[must_use]
pub fn order_number() -> String {
    let code = rand::rng().random_range(1000..10000);
    format!("{ORDER_PREFIX}{code}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use marigold_core::NewEntry;

    #[test]
    fn test_order_number_shape() {
        for _ in 0..32 {
            let number = order_number();
            let code = number.strip_prefix(ORDER_PREFIX).unwrap();
            assert_eq!(code.len(), 4);
            let code: u32 = code.parse().unwrap();
            assert!((1000..10000).contains(&code));
        }
    }

    #[test]
    fn test_capture_totals_the_lines() {
        let mut haircut = NewEntry::service("Haircut", Decimal::new(15000, 2), "Hair", "Jane")
            .into_entry()
            .unwrap();
        haircut.quantity = 2;
        let mug = NewEntry::item("Mug", Decimal::new(5000, 2), "Kitchen")
            .into_entry()
            .unwrap();

        let receipt = Receipt::capture(vec![haircut, mug]);
        assert_eq!(receipt.total, Decimal::new(35000, 2));
        assert_eq!(receipt.entries.len(), 2);
    }
}
