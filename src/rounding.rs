//! Half-up rounding helpers.
//!
//! Midpoints round toward positive infinity for both floats and decimals:
//! `2.5` becomes `3` and `-2.5` becomes `-2`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Round to the nearest integer, midpoints up.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, midpoints up.
pub(crate) fn round1(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Round a decimal to `dp` places, midpoints up.
pub(crate) fn round_decimal(value: Decimal, dp: u32) -> Decimal {
    let scale = Decimal::from(10u64.pow(dp));
    ((value * scale + dec!(0.5)).floor() / scale).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_midpoints() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.49), 2.0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(7.52), 7.5);
        assert_eq!(round1(4.464), 4.5);
        assert_eq!(round1(10.0), 10.0);
    }

    #[test]
    fn test_round_decimal() {
        assert_eq!(round_decimal(dec!(2.08), 1), dec!(2.1));
        assert_eq!(round_decimal(dec!(-2.5), 0), dec!(-2));
        assert_eq!(round_decimal(dec!(1630.625), 0), dec!(1631));
        assert_eq!(round_decimal(dec!(18460), 0), dec!(18460));
    }
}
