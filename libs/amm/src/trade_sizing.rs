//! Maximum trade sizing under the price impact ceiling
//!
//! Lets a trade form cap its input field at the largest amount the quote
//! path will accept for the current reserves.

use crate::ratio::{bps_as_percent, decimal, fee_complement};
use crate::SwapMath;
use amm_config::engine::BPS_DENOMINATOR;
use amm_config::EngineConfig;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use types::AmmResult;

/// Decimal rounding can land the closed form one unit off in either direction
const MAX_CORRECTION_STEPS: usize = 4;

/// Calculates trade size limits for a pool
pub struct TradeSizer {
    config: EngineConfig,
}

impl Default for TradeSizer {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl TradeSizer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Largest input whose price impact stays within the configured ceiling
    ///
    /// Solves `impact(x) <= max` for `x`:
    ///
    /// `x <= reserve_in * (fc / (1 - max) - 10_000) / fc` with `fc = 10_000 - fee_bps`.
    ///
    /// Returns 0 when the fee alone exceeds the ceiling.
    pub fn max_input_within_impact(&self, reserve_in: u64, reserve_out: u64) -> AmmResult<u64> {
        SwapMath::validate_reserves(reserve_in, reserve_out)?;

        let max_impact = bps_as_percent(self.config.max_price_impact_bps);
        let retained = Decimal::ONE - max_impact / Decimal::ONE_HUNDRED;
        if retained <= Decimal::ZERO {
            // A 100% ceiling admits every finite trade
            return Ok(u64::MAX);
        }

        let operation = "trade sizing";
        let complement = decimal(fee_complement(self.config.fee_bps), operation)?;
        if complement.is_zero() {
            return Ok(0);
        }

        let bound = decimal(reserve_in as u128, operation)?
            * (complement / retained - Decimal::from(BPS_DENOMINATOR))
            / complement;
        if bound <= Decimal::ZERO {
            return Ok(0);
        }

        let mut amount = bound.floor().to_u64().unwrap_or(u64::MAX);
        let within = |x: u64| -> AmmResult<bool> {
            if x == 0 {
                return Ok(true);
            }
            let impact =
                SwapMath::calculate_price_impact(x, reserve_in, reserve_out, self.config.fee_bps)?;
            Ok(impact <= max_impact)
        };

        for _ in 0..MAX_CORRECTION_STEPS {
            if within(amount)? {
                break;
            }
            amount -= 1;
        }
        for _ in 0..MAX_CORRECTION_STEPS {
            let Some(next) = amount.checked_add(1) else {
                break;
            };
            if !within(next)? {
                break;
            }
            amount = next;
        }

        Ok(amount)
    }

    /// Output bought by [`Self::max_input_within_impact`]
    pub fn max_output_within_impact(&self, reserve_in: u64, reserve_out: u64) -> AmmResult<u64> {
        let amount_in = self.max_input_within_impact(reserve_in, reserve_out)?;
        if amount_in == 0 {
            return Ok(0);
        }
        SwapMath::calculate_output_amount(amount_in, reserve_in, reserve_out, self.config.fee_bps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ErrorCode;

    #[test]
    fn test_max_input_is_tight() {
        let sizer = TradeSizer::default();
        let max = sizer.max_input_within_impact(1_000_000, 1_000_000).unwrap();

        // 1_000_000 * (9_970 / 0.7 - 10_000) / 9_970 ≈ 425_537
        assert!((425_000..426_000).contains(&max));

        let config = sizer.config().clone();
        assert!(SwapMath::quote(max, 1_000_000, 1_000_000, &config).is_ok());

        let err = SwapMath::quote(max + 1, 1_000_000, 1_000_000, &config).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ExcessivePriceImpact);
    }

    #[test]
    fn test_fee_above_ceiling_allows_nothing() {
        let sizer = TradeSizer::new(EngineConfig {
            fee_bps: 500,
            max_price_impact_bps: 100,
            ..EngineConfig::default()
        });
        assert_eq!(sizer.max_input_within_impact(1_000_000, 1_000_000).unwrap(), 0);
        assert_eq!(sizer.max_output_within_impact(1_000_000, 1_000_000).unwrap(), 0);
    }

    #[test]
    fn test_full_ceiling_is_unbounded() {
        let sizer = TradeSizer::new(EngineConfig {
            max_price_impact_bps: 10_000,
            ..EngineConfig::default()
        });
        assert_eq!(sizer.max_input_within_impact(1_000, 1_000).unwrap(), u64::MAX);
    }

    #[test]
    fn test_empty_side_rejected() {
        let err = TradeSizer::default().max_input_within_impact(1_000, 0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InsufficientLiquidity);
    }
}
