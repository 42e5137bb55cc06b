//! Money rounding and formatting helpers.
//!
//! Prices are [`rust_decimal::Decimal`] values. The storefront displays
//! amounts in rand with two decimal places, rounded half-up; no other
//! currency or locale handling exists.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount to two decimal places, half-up.
#[must_use]
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount for display, e.g. `R 150.00`.
#[must_use]
pub fn format_rand(amount: Decimal) -> String {
    format!("R {:.2}", round_half_up(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(Decimal::new(12345, 3)), Decimal::new(1235, 2));
        assert_eq!(round_half_up(Decimal::new(12344, 3)), Decimal::new(1234, 2));
        assert_eq!(round_half_up(Decimal::new(125, 3)), Decimal::new(13, 2));
    }

    #[test]
    fn test_format_rand() {
        assert_eq!(format_rand(Decimal::new(15000, 2)), "R 150.00");
        assert_eq!(format_rand(Decimal::new(5, 1)), "R 0.50");
        assert_eq!(format_rand(Decimal::ZERO), "R 0.00");
    }

    #[test]
    fn test_format_rounds_before_display() {
        assert_eq!(format_rand(Decimal::new(99995, 4)), "R 10.00");
    }
}
