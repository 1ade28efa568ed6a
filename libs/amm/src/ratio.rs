//! Shared fixed-point helpers for the calculators

use amm_config::engine::BPS_DENOMINATOR;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use types::{AmmError, AmmResult};

/// Lossless u128 → Decimal for values within Decimal's 96-bit mantissa
pub(crate) fn decimal(value: u128, operation: &'static str) -> AmmResult<Decimal> {
    i128::try_from(value)
        .ok()
        .and_then(|v| Decimal::try_from_i128_with_scale(v, 0).ok())
        .ok_or(AmmError::Overflow { operation })
}

/// 3_000 bps → 30.00 (percent)
pub(crate) fn bps_as_percent(bps: u32) -> Decimal {
    Decimal::new(bps as i64, 2)
}

/// `10_000 - fee_bps`, the share of input that reaches the curve
pub(crate) fn fee_complement(fee_bps: u32) -> u128 {
    BPS_DENOMINATOR.saturating_sub(fee_bps as u64) as u128
}

/// Display conversion for percentage fields
pub(crate) fn to_display(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Narrow a u128 amount to u64
pub(crate) fn to_amount(value: u128, operation: &'static str) -> AmmResult<u64> {
    u64::try_from(value).map_err(|_| AmmError::Overflow { operation })
}
