//! Decimal formatting for `f64` values
//!
//! All output is fixed-point. `format_with_precision` rounds the exact binary
//! value of its input, so `1.115` (stored as `1.11499999…`) shows as `1.11`.
//! Only values sitting exactly on a half are pushed away from zero.

/// Largest precision honoured by [`format_with_precision`] and [`round`].
///
/// Anything larger is clamped. No finite `f64` gains digits past this point
/// that could change a tie.
pub const MAX_PRECISION: u32 = 1022;

/// Render `value` with the fewest digits that still round-trip.
///
/// Never switches to scientific notation: `1e-7` renders as `0.0000001`.
pub fn format(value: f64) -> String {
    format!("{}", value)
}

/// Render `value` with exactly `precision` digits after the decimal point.
///
/// A `precision` of zero yields no decimal point at all. Exact halves round
/// away from zero and a result of zero never carries a sign.
pub fn format_with_precision(value: f64, precision: u32) -> String {
    let precision = precision.min(MAX_PRECISION);
    // std rounds exact ties to even; step one ulp outward so they go up
    let value = if is_exact_tie(value, precision) {
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    let mut out = format!("{:.*}", precision as usize, value);
    if out.starts_with('-') && out[1..].bytes().all(|b| b == b'0' || b == b'.') {
        out.remove(0);
    }
    out
}

/// Whether `value` lies exactly halfway between two multiples of `10^-precision`.
///
/// That holds iff `value * 2^(precision + 1)` is an odd integer. Scaling by a
/// power of two is exact, so no decimal rounding creeps in.
fn is_exact_tie(value: f64, precision: u32) -> bool {
    let scaled = value * 2f64.powi(precision as i32 + 1);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 != 0.0
}

/// Round `value` to `decimals` places, halves away from zero.
///
/// This is the stored-rounding helper; display goes through
/// [`format_with_precision`].
pub fn round(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_PRECISION) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_shortest() {
        assert_eq!(format(100.0), "100");
        assert_eq!(format(0.1), "0.1");
        assert_eq!(format(2.2046244201837775), "2.2046244201837775");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format(-2.5), "-2.5");
        assert_eq!(format_with_precision(-2.5, 2), "-2.50");
    }

    #[test]
    fn test_format_never_scientific() {
        assert_eq!(format(1e-7), "0.0000001");
        assert_eq!(format(1e21), "1000000000000000000000");
        assert_eq!(format_with_precision(1e-7, 2), "0.00");
    }

    #[test]
    fn test_format_with_precision_carries() {
        assert_eq!(format_with_precision(9.99, 1), "10.0");
    }

    #[test]
    fn test_format_with_precision_half_away_from_zero() {
        assert_eq!(format_with_precision(2.5, 0), "3");
        assert_eq!(format_with_precision(-2.5, 0), "-3");
        assert_eq!(format_with_precision(0.125, 2), "0.13");
    }

    #[test]
    fn test_format_with_precision_zero_digits() {
        assert_eq!(format_with_precision(500.0, 0), "500");
        assert_eq!(format_with_precision(15.4, 0), "15");
    }

    #[test]
    fn test_format_with_precision_no_negative_zero() {
        assert_eq!(format_with_precision(-0.004, 2), "0.00");
        assert_eq!(format_with_precision(-0.4, 0), "0");
    }

    #[test]
    fn test_format_with_precision_uses_exact_binary_value() {
        // 1.115 is stored as 1.11499999..., 2.675 as 2.67499999...
        assert_eq!(format_with_precision(1.115, 2), "1.11");
        assert_eq!(format_with_precision(2.675, 2), "2.67");
        assert_eq!(format_with_precision(-1.115, 2), "-1.11");
        assert_eq!(format_with_precision(1.125, 2), "1.13");
        assert_eq!(format_with_precision(-1.125, 2), "-1.13");
    }

    #[test]
    fn test_format_with_precision_clamps_huge_precision() {
        let out = format_with_precision(1.0, 70_000);
        assert_eq!(out.len(), 2 + MAX_PRECISION as usize);
        assert!(out.starts_with("1.000"));
    }

    #[test]
    fn test_round() {
        assert_eq!(round(1.23456, 2), 1.23);
        assert_eq!(round(-1.5, 0), -2.0);
        assert_eq!(round(1000.0, 2), 1000.0);
    }

    #[test]
    fn test_round_keeps_huge_values() {
        assert_eq!(round(f64::MAX, 2), f64::MAX);
        assert!(round(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_round_huge_decimals() {
        assert_eq!(round(1.5, u32::MAX), 1.5);
        assert_eq!(round(1.25, 70_000), 1.25);
    }
}
