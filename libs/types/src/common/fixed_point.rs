//! Raw ⇄ display unit conversion for fixed-point token amounts
//!
//! On-chain amounts are integers scaled by `10^decimals` (6 for the outcome
//! tokens in this system). UIs work in decimal display units.
//!
//! ## Conversion Boundaries
//!
//! - [`to_display_units`] / [`to_raw_units`]: `f64` path for form fields and
//!   charts. Round-trips exactly for every `raw <= MAX_EXACT_RAW`.
//! - [`format_display_units`] / [`parse_display_units`]: exact decimal string
//!   path via `rust_decimal`, lossless for every `u64`.

use crate::common::errors::{AmmError, AmmResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest raw amount for which the `f64` round-trip is exact
///
/// Division and multiplication by `10^d` each add at most half an ulp of
/// relative error, so the recovered value stays within 0.25 of `raw` up to 2^50.
/// Holds for every `decimals <= 22`, where `10^d` is itself exact in `f64`.
pub const MAX_EXACT_RAW: u64 = 1 << 50;

/// Largest `decimals` accepted by the exact string path
/// (`10^19` is the last power of ten in u64)
pub const MAX_DECIMALS: u8 = 19;

/// Convert a raw fixed-point amount to display units
///
/// # Warning
/// Only use for display or form pre-fill. Never feed the result back into
/// amount arithmetic.
pub fn to_display_units(raw: u64, decimals: u8) -> f64 {
    raw as f64 / 10f64.powi(decimals as i32)
}

/// Convert a display amount to raw fixed-point units, rounding to nearest
///
/// Accepts any `decimals` [`to_display_units`] accepts; the only limit is that
/// the scaled result fits in u64.
pub fn to_raw_units(display: f64, decimals: u8) -> AmmResult<u64> {
    if !display.is_finite() || display < 0.0 {
        return Err(AmmError::InvalidAmount {
            value: display.to_string(),
        });
    }
    if display == 0.0 {
        return Ok(0);
    }

    let scaled = (display * 10f64.powi(decimals as i32)).round();

    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    if !scaled.is_finite() || scaled >= u64::MAX as f64 {
        return Err(AmmError::InvalidAmount {
            value: display.to_string(),
        });
    }

    Ok(scaled as u64)
}

/// Format a raw amount as an exact decimal string (trailing zeros trimmed)
///
/// # Examples
/// ```
/// use types::format_display_units;
///
/// assert_eq!(format_display_units(1_500_000, 6), "1.5");
/// assert_eq!(format_display_units(1, 6), "0.000001");
/// ```
pub fn format_display_units(raw: u64, decimals: u8) -> String {
    let scale = decimals.min(MAX_DECIMALS) as u32;
    Decimal::from_i128_with_scale(raw as i128, scale)
        .normalize()
        .to_string()
}

/// Parse an exact decimal string into raw units
///
/// Rejects negative values, values with more fractional digits than
/// `decimals`, and values that do not fit in u64.
pub fn parse_display_units(input: &str, decimals: u8) -> AmmResult<u64> {
    let invalid = || AmmError::InvalidAmount {
        value: input.to_string(),
    };

    if decimals > MAX_DECIMALS {
        return Err(invalid());
    }

    let value = Decimal::from_str(input.trim()).map_err(|_| invalid())?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(invalid());
    }

    let scaled = value
        .checked_mul(Decimal::from(10u64.pow(decimals as u32)))
        .ok_or_else(invalid)?;
    if scaled.fract() != Decimal::ZERO {
        return Err(invalid());
    }

    scaled.to_u64().ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usdc_scale_conversions() {
        assert_eq!(to_display_units(1_000_000, 6), 1.0);
        assert_eq!(to_display_units(10_000, 6), 0.01);
        assert_eq!(to_raw_units(1.0, 6).unwrap(), 1_000_000);
        assert_eq!(to_raw_units(0.001, 6).unwrap(), 1_000);
    }

    #[test]
    fn test_to_raw_rounds_to_nearest() {
        assert_eq!(to_raw_units(0.0000004, 6).unwrap(), 0);
        assert_eq!(to_raw_units(0.0000006, 6).unwrap(), 1);
    }

    #[test]
    fn test_to_raw_rejects_invalid_display_values() {
        for bad in [-1.0, f64::NAN, f64::INFINITY, 1e30] {
            let err = to_raw_units(bad, 6).unwrap_err();
            assert_eq!(err.code(), crate::ErrorCode::InvalidAmount);
        }
    }

    #[test]
    fn test_round_trip_beyond_string_path_decimals() {
        for decimals in [20u8, 21, 22] {
            assert_eq!(to_raw_units(to_display_units(1, decimals), decimals).unwrap(), 1);
            assert_eq!(to_raw_units(to_display_units(12_345, decimals), decimals).unwrap(), 12_345);
        }
        assert_eq!(to_raw_units(0.0, 255).unwrap(), 0);
        assert!(to_raw_units(1.0, 20).is_err());
        assert!(to_raw_units(1.0, 255).is_err());
    }

    #[test]
    fn test_round_trip_at_exact_bound() {
        for decimals in [0u8, 6, 9, 18, 22] {
            let raw = MAX_EXACT_RAW;
            assert_eq!(to_raw_units(to_display_units(raw, decimals), decimals).unwrap(), raw);
        }
    }

    #[test]
    fn test_exact_string_path() {
        assert_eq!(format_display_units(123_456_789, 6), "123.456789");
        assert_eq!(format_display_units(0, 6), "0");
        assert_eq!(format_display_units(u64::MAX, 0), u64::MAX.to_string());

        assert_eq!(parse_display_units("123.456789", 6).unwrap(), 123_456_789);
        assert_eq!(parse_display_units("0.001", 6).unwrap(), 1_000);
        assert!(parse_display_units("0.0000001", 6).is_err());
        assert!(parse_display_units("-1", 6).is_err());
        assert!(parse_display_units("abc", 6).is_err());
    }
}
