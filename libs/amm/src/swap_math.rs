//! Constant-product swap quotes for YES/NO outcome pools
//!
//! Amounts use u128 integer intermediates with floor division so the quoted
//! output never exceeds what the on-chain x*y=k check will pay. Price impact
//! is a display value computed in Decimal.

use crate::ratio::{bps_as_percent, decimal, fee_complement, to_amount, to_display};
use amm_config::engine::BPS_DENOMINATOR;
use amm_config::EngineConfig;
use rust_decimal::Decimal;
use tracing::debug;
use types::{AmmError, AmmResult, SwapQuote};

const BPS: u128 = BPS_DENOMINATOR as u128;

/// Swap math functions for constant-product outcome pools
pub struct SwapMath;

impl SwapMath {
    /// Calculate exact output amount using the x*y=k formula
    ///
    /// # Arguments
    /// * `amount_in` - Input token amount (raw units)
    /// * `reserve_in` - Reserve of the token paid in (raw units)
    /// * `reserve_out` - Reserve of the token paid out (raw units)
    /// * `fee_bps` - Fee in basis points (30 = 0.3%)
    ///
    /// # Returns
    /// Output amount after fees, rounded down
    pub fn calculate_output_amount(
        amount_in: u64,
        reserve_in: u64,
        reserve_out: u64,
        fee_bps: u32,
    ) -> AmmResult<u64> {
        Self::validate_reserves(reserve_in, reserve_out)?;
        if amount_in == 0 {
            return Err(AmmError::AmountTooSmall {
                amount: 0,
                minimum: 1,
            });
        }

        // output = (amount_in_with_fee * reserve_out) / (reserve_in * 10_000 + amount_in_with_fee)
        let amount_in_with_fee = amount_in as u128 * fee_complement(fee_bps);
        let numerator = amount_in_with_fee
            .checked_mul(reserve_out as u128)
            .ok_or(AmmError::Overflow {
                operation: "swap output numerator",
            })?;
        let denominator = reserve_in as u128 * BPS + amount_in_with_fee;

        to_amount(numerator / denominator, "swap output")
    }

    /// Calculate required input amount for desired output (reverse calculation)
    ///
    /// Rounds up, so quoting the returned input forward yields at least
    /// `amount_out`.
    pub fn calculate_input_amount(
        amount_out: u64,
        reserve_in: u64,
        reserve_out: u64,
        fee_bps: u32,
    ) -> AmmResult<u64> {
        Self::validate_reserves(reserve_in, reserve_out)?;
        if amount_out == 0 {
            return Err(AmmError::AmountTooSmall {
                amount: 0,
                minimum: 1,
            });
        }
        if amount_out >= reserve_out {
            return Err(AmmError::InsufficientLiquidity {
                reason: "output exceeds reserves",
            });
        }

        let overflow = AmmError::Overflow {
            operation: "swap input numerator",
        };
        let numerator = (reserve_in as u128)
            .checked_mul(amount_out as u128)
            .and_then(|v| v.checked_mul(BPS))
            .ok_or(overflow)?;
        let denominator = (reserve_out - amount_out) as u128 * fee_complement(fee_bps);

        if denominator == 0 {
            return Err(AmmError::InsufficientLiquidity {
                reason: "fee consumes the entire input",
            });
        }

        // Add 1 to round up (ensures sufficient input)
        to_amount(numerator / denominator + 1, "swap input")
    }

    /// Fee charged on the input, rounded down
    pub fn calculate_fee(amount_in: u64, fee_bps: u32) -> u64 {
        // fee_bps is capped at the denominator, so the result is <= amount_in
        (amount_in as u128 * fee_bps.min(BPS_DENOMINATOR as u32) as u128 / BPS) as u64
    }

    /// Output less slippage tolerance, rounded down
    pub fn calculate_minimum_output(output_amount: u64, slippage_tolerance_bps: u32) -> u64 {
        (output_amount as u128 * fee_complement(slippage_tolerance_bps) / BPS) as u64
    }

    /// Calculate price impact of a trade in percent
    ///
    /// Deviation of the execution price from the pre-trade spot price
    /// `reserve_out / reserve_in`. Uses the unrounded output, which makes the
    /// impact strictly increasing in `amount_in` and independent of
    /// `reserve_out`:
    ///
    /// `impact = (1 - (reserve_in * (1 - fee)) / (reserve_in + amount_in * (1 - fee))) * 100`
    pub fn calculate_price_impact(
        amount_in: u64,
        reserve_in: u64,
        reserve_out: u64,
        fee_bps: u32,
    ) -> AmmResult<Decimal> {
        Self::validate_reserves(reserve_in, reserve_out)?;
        if amount_in == 0 {
            return Err(AmmError::AmountTooSmall {
                amount: 0,
                minimum: 1,
            });
        }

        let complement = fee_complement(fee_bps);
        let operation = "price impact";

        // execution / spot
        let ratio = decimal(reserve_in as u128 * complement, operation)?
            / decimal(
                reserve_in as u128 * BPS + amount_in as u128 * complement,
                operation,
            )?;

        Ok((Decimal::ONE - ratio) * Decimal::ONE_HUNDRED)
    }

    /// Full swap quote with fee, impact ceiling and slippage-protected minimum
    pub fn quote(
        amount_in: u64,
        reserve_in: u64,
        reserve_out: u64,
        config: &EngineConfig,
    ) -> AmmResult<SwapQuote> {
        let output_amount =
            Self::calculate_output_amount(amount_in, reserve_in, reserve_out, config.fee_bps)?;

        if output_amount == 0 {
            let minimum =
                Self::calculate_input_amount(1, reserve_in, reserve_out, config.fee_bps)
                    .unwrap_or(amount_in.saturating_add(1));
            debug!(amount_in, minimum, "Swap rejected: output rounds to zero");
            return Err(AmmError::AmountTooSmall {
                amount: amount_in,
                minimum,
            });
        }

        let impact =
            Self::calculate_price_impact(amount_in, reserve_in, reserve_out, config.fee_bps)?;
        let max_impact = bps_as_percent(config.max_price_impact_bps);

        if impact > max_impact {
            debug!(
                amount_in,
                reserve_in,
                reserve_out,
                %impact,
                %max_impact,
                "Swap rejected: price impact above ceiling"
            );
            return Err(AmmError::ExcessivePriceImpact {
                impact: impact.round_dp(4),
                max: max_impact,
            });
        }

        let quote = SwapQuote {
            output_amount,
            fee: Self::calculate_fee(amount_in, config.fee_bps),
            price_impact: to_display(impact),
            minimum_output: Self::calculate_minimum_output(
                output_amount,
                config.slippage_tolerance_bps,
            ),
        };

        debug!(amount_in, ?quote, "Swap quoted");
        Ok(quote)
    }

    /// Quote the smallest input that buys at least `amount_out`
    pub fn quote_for_output(
        amount_out: u64,
        reserve_in: u64,
        reserve_out: u64,
        config: &EngineConfig,
    ) -> AmmResult<SwapQuote> {
        let amount_in =
            Self::calculate_input_amount(amount_out, reserve_in, reserve_out, config.fee_bps)?;
        Self::quote(amount_in, reserve_in, reserve_out, config)
    }

    /// Both reserves must be funded for a spot price to exist
    pub(crate) fn validate_reserves(reserve_in: u64, reserve_out: u64) -> AmmResult<()> {
        if reserve_in == 0 {
            return Err(AmmError::InsufficientLiquidity {
                reason: "input reserve is zero",
            });
        }
        if reserve_out == 0 {
            return Err(AmmError::InsufficientLiquidity {
                reason: "output reserve is zero",
            });
        }
        Ok(())
    }
}
