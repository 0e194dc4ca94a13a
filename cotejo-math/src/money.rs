//! Decimal arithmetic primitives for monetary values
//!
//! Every price, average and total in the engine flows through these
//! helpers so that the rounding rule is fixed in exactly one place:
//! two decimal places, midpoint away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places carried by monetary values on display
pub const MONEY_SCALE: u32 = 2;

/// Round a value to two decimal places, half away from zero.
///
/// A midpoint such as `2.005` rounds to `2.01` (and `-2.005` to `-2.01`).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Arithmetic mean of a slice of values, at full precision.
///
/// Returns `None` for an empty slice; rounding is left to the caller.
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum: Decimal = values.iter().copied().sum();
    Some(sum / Decimal::from(values.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round2_exact_values() {
        assert_eq!(round2(dec!(2.50)), dec!(2.50));
        assert_eq!(round2(dec!(250)), dec!(250));
    }

    #[test]
    fn test_round2_midpoint_away_from_zero() {
        assert_eq!(round2(dec!(2.005)), dec!(2.01));
        assert_eq!(round2(dec!(2.015)), dec!(2.02));
        assert_eq!(round2(dec!(-2.005)), dec!(-2.01));
    }

    #[test]
    fn test_round2_below_midpoint() {
        assert_eq!(round2(dec!(2.004)), dec!(2.00));
        assert_eq!(round2(dec!(2.0049)), dec!(2.00));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_simple() {
        assert_eq!(mean(&[dec!(2.00), dec!(3.00)]), Some(dec!(2.5)));
    }

    #[test]
    fn test_mean_keeps_full_precision() {
        // 1 / 3 is not representable at two decimal places; the mean
        // itself must not round
        let m = mean(&[dec!(0), dec!(0), dec!(1)]).unwrap();
        assert!(m > dec!(0.33));
        assert!(m < dec!(0.34));
        assert_eq!(round2(m), dec!(0.33));
    }
}
