//! # Unit Types
//!
//! Type-safe wrappers for the worksheet's units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! The worksheet takes measurements in inches and reports feet and square feet:
//! - Length: inches (in), feet (ft)
//! - Area: square feet (sq ft)
//!
//! This module also holds the two numeric helpers every other module leans on:
//! [`to_fixed`] (fixed-point display formatting) and [`parse_number`]
//! (lenient coercion of raw text input).
//!
//! ## Example
//!
//! ```rust
//! use sqft_core::units::{to_fixed, Feet, Inches};
//!
//! let height = Inches(36.0);
//! let feet: Feet = height.into();
//! assert_eq!(feet.0, 3.0);
//! assert_eq!(to_fixed(feet.0, 2), "3.00");
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Extra digits formatted past the cut point so ties can be detected
/// on the exact binary value.
const GUARD_DIGITS: usize = 25;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / INCHES_PER_FOOT)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl Mul for Feet {
    type Output = SqFt;
    fn mul(self, rhs: Feet) -> SqFt {
        SqFt(self.0 * rhs.0)
    }
}

impl Add for SqFt {
    type Output = SqFt;
    fn add(self, rhs: SqFt) -> SqFt {
        SqFt(self.0 + rhs.0)
    }
}

impl std::iter::Sum for SqFt {
    fn sum<I: Iterator<Item = SqFt>>(iter: I) -> Self {
        iter.fold(SqFt(0.0), |acc, x| acc + x)
    }
}


// ============================================================================
// Formatting and Coercion
// ============================================================================

/// Format `value` with exactly `digits` decimals.
///
/// The result is the decimal nearest the exact binary value of `value`. On an
/// exact tie the larger magnitude wins, so `to_fixed(0.125, 2)` is `"0.13"`
/// (plain `format!` would round half to even and give `"0.12"`).
///
/// Magnitudes of `1e21` and above come back in exponential form (`"1e+21"`),
/// and non-finite values as `"Infinity"`, `"-Infinity"` or `"NaN"`.
///
/// ```rust
/// use sqft_core::units::to_fixed;
///
/// assert_eq!(to_fixed(5.0 / 12.0, 2), "0.42");
/// assert_eq!(to_fixed(5.0 / 12.0, 6), "0.416667");
/// assert_eq!(to_fixed(0.0, 2), "0.00");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= 1e21 {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }

    let wide = format!("{:.*}", digits + GUARD_DIGITS, value.abs());
    let (int_part, frac_part) = wide.split_once('.').unwrap_or((wide.as_str(), ""));
    let (kept, rest) = frac_part.split_at(digits.min(frac_part.len()));

    let mut decimal: Vec<u8> = int_part
        .bytes()
        .chain(kept.bytes())
        .map(|b| b - b'0')
        .collect();

    if rest.as_bytes().first().is_some_and(|&b| b >= b'5') {
        round_up(&mut decimal);
    }

    let split = decimal.len() - digits;
    let mut out = String::with_capacity(decimal.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(decimal[..split].iter().map(|&d| char::from(b'0' + d)));
    if digits > 0 {
        out.push('.');
        out.extend(decimal[split..].iter().map(|&d| char::from(b'0' + d)));
    }
    out
}

/// Add one unit in the last place to a big-endian digit vector.
fn round_up(decimal: &mut Vec<u8>) {
    for d in decimal.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    decimal.insert(0, 1);
}

/// Coerce raw text into a number.
///
/// Surrounding whitespace is ignored. Empty, unparsable or non-finite text
/// becomes `0.0`; this never fails.
///
/// ```rust
/// use sqft_core::units::parse_number;
///
/// assert_eq!(parse_number(" 36 "), 36.0);
/// assert_eq!(parse_number(""), 0.0);
/// assert_eq!(parse_number("abc"), 0.0);
/// ```
pub fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_feet() {
        let inches = Inches(30.0);
        let ft: Feet = inches.into();
        assert_eq!(ft.0, 2.5);
    }

    #[test]
    fn test_feet_product_is_area() {
        let area = Feet(3.0) * Feet(2.0);
        assert_eq!(area, SqFt(6.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = SqFt(10.0);
        let b = SqFt(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((b + SqFt(-5.0)).0, 0.0);
    }

    #[test]
    fn test_sum() {
        let total: SqFt = [SqFt(1.5), SqFt(2.25), SqFt(0.0)].into_iter().sum();
        assert_eq!(total.0, 3.75);
    }

    #[test]
    fn test_to_fixed_rounds_ties_away_from_zero() {
        // 1.5 in / 12 = 0.125 ft exactly
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_to_fixed_uses_exact_binary_value() {
        // 1.005 is stored slightly below the tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.42 * 0.42, 2), "0.18");
    }

    #[test]
    fn test_to_fixed_carries() {
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(0.995_000_1, 2), "1.00");
    }

    #[test]
    fn test_to_fixed_six_digits() {
        assert_eq!(to_fixed(3.0, 6), "3.000000");
        assert_eq!(to_fixed(7.0 / 12.0, 6), "0.583333");
        assert_eq!(to_fixed(1.0 / 12.0, 6), "0.083333");
    }

    #[test]
    fn test_to_fixed_negative() {
        assert_eq!(to_fixed(-1.5, 1), "-1.5");
    }

    #[test]
    fn test_to_fixed_non_finite() {
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 6), "-Infinity");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_to_fixed_huge_values_use_exponent() {
        assert_eq!(to_fixed(1e21, 6), "1e+21");
        assert_eq!(to_fixed(1.2e22, 2), "1.2e+22");
        assert_eq!(to_fixed(-1e21, 2), "-1e+21");
        assert_eq!(to_fixed(1e20, 0), "100000000000000000000");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12.5"), 12.5);
        assert_eq!(parse_number("  7 "), 7.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("-3"), -3.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("12in"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
    }

    #[test]
    fn test_serialization() {
        let ft = Feet(12.5);
        let json = serde_json::to_string(&ft).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Feet = serde_json::from_str(&json).unwrap();
        assert_eq!(ft, roundtrip);
    }
}
