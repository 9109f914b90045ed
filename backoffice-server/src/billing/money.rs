//! Money calculation utilities using rust_decimal for precision
//!
//! Monetary values are stored and serialized as `f64`; every calculation
//! goes through `Decimal` and is rounded to 2 decimal places.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Invoice line total: `unit_price * quantity`
///
/// Returns `None` when the unit price is not a finite non-negative number
/// or the result does not fit an `f64`.
pub fn line_total(unit_price: f64, quantity: i64) -> Option<f64> {
    if !unit_price.is_finite() || unit_price < 0.0 {
        return None;
    }
    let price = Decimal::from_f64(unit_price)?;
    (price * Decimal::from(quantity))
        .round_dp(DECIMAL_PLACES)
        .to_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_price_by_quantity() {
        assert_eq!(line_total(1_000_000.0, 3), Some(3_000_000.0));
        assert_eq!(line_total(250.0, 1), Some(250.0));
        assert_eq!(line_total(0.0, 7), Some(0.0));
    }

    #[test]
    fn rounds_to_two_decimal_places() {
        // 19.99 * 3 = 59.97, exact under Decimal where f64 would drift
        assert_eq!(line_total(19.99, 3), Some(59.97));
        assert_eq!(line_total(0.1, 3), Some(0.3));
    }

    #[test]
    fn rejects_non_finite_and_negative_prices() {
        assert_eq!(line_total(f64::NAN, 2), None);
        assert_eq!(line_total(f64::INFINITY, 2), None);
        assert_eq!(line_total(-1.0, 2), None);
    }
}
