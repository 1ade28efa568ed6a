//! Add/remove liquidity quotes with LP-token accounting
//!
//! The bootstrap deposit into an empty pool is forced 1:1 and owns the whole
//! pool. Later deposits must follow the existing YES:NO ratio; LP tokens are
//! credited on the `min` of the two ratio-implied amounts so a deposit that
//! drifts off-ratio is never over-credited.
//!
//! A pool with reserves but no reported LP supply is treated as if
//! `yes_reserve` LP tokens were outstanding, matching 1:1 minting on the
//! YES side.

use crate::ratio::{decimal, to_amount, to_display};
use amm_config::engine::BPS_DENOMINATOR;
use amm_config::EngineConfig;
use rust_decimal::Decimal;
use tracing::debug;
use types::{AmmError, AmmResult, LiquidityQuote, PoolReserves, RemovalQuote};

/// Liquidity provision math for outcome pools
pub struct LiquidityMath;

impl LiquidityMath {
    /// Quote a deposit of `yes_amount`, deriving the NO counterpart from the pool ratio
    pub fn quote_deposit(
        yes_amount: u64,
        reserves: &PoolReserves,
        total_lp_supply: u64,
        config: &EngineConfig,
    ) -> AmmResult<LiquidityQuote> {
        Self::check_minimum(yes_amount, config)?;

        if reserves.is_empty() {
            return Ok(Self::bootstrap_quote(yes_amount, yes_amount));
        }

        let no_amount = Self::required_no_amount(yes_amount, reserves)?;
        Self::quote_funded(yes_amount, no_amount, reserves, total_lp_supply)
    }

    /// Quote a deposit of explicit YES and NO amounts
    ///
    /// Rejects amounts off the pool ratio by more than
    /// `config.ratio_tolerance_bps` with `INVALID_RATIO`.
    pub fn quote_exact_amounts(
        yes_amount: u64,
        no_amount: u64,
        reserves: &PoolReserves,
        total_lp_supply: u64,
        config: &EngineConfig,
    ) -> AmmResult<LiquidityQuote> {
        Self::check_minimum(yes_amount, config)?;
        Self::validate_deposit_ratio(yes_amount, no_amount, reserves, config.ratio_tolerance_bps)?;

        if reserves.is_empty() {
            return Ok(Self::bootstrap_quote(yes_amount, no_amount));
        }

        Self::quote_funded(yes_amount, no_amount, reserves, total_lp_supply)
    }

    /// NO amount matching `yes_amount` at the pool ratio, rounded down
    ///
    /// An empty pool bootstraps at 1:1.
    pub fn required_no_amount(yes_amount: u64, reserves: &PoolReserves) -> AmmResult<u64> {
        if reserves.is_empty() {
            return Ok(yes_amount);
        }
        Self::check_two_sided(yes_amount, reserves)?;

        let required =
            yes_amount as u128 * reserves.no_reserve as u128 / reserves.yes_reserve as u128;
        to_amount(required, "required NO amount")
    }

    /// LP tokens minted for a deposit into a funded pool
    ///
    /// `min(yes * supply / yes_reserve, no * supply / no_reserve)`, rounded down.
    pub fn lp_tokens_for_deposit(
        yes_amount: u64,
        no_amount: u64,
        reserves: &PoolReserves,
        total_lp_supply: u64,
    ) -> AmmResult<u64> {
        Self::check_two_sided(yes_amount, reserves)?;

        let supply = Self::effective_supply(reserves, total_lp_supply) as u128;
        let overflow = AmmError::Overflow {
            operation: "LP token mint",
        };

        let from_yes = (yes_amount as u128)
            .checked_mul(supply)
            .ok_or_else(|| overflow.clone())?
            / reserves.yes_reserve as u128;
        let from_no = (no_amount as u128).checked_mul(supply).ok_or(overflow)?
            / reserves.no_reserve as u128;

        to_amount(from_yes.min(from_no), "LP token mint")
    }

    /// Check that `no_amount` matches the pool ratio within `tolerance_bps`
    pub fn validate_deposit_ratio(
        yes_amount: u64,
        no_amount: u64,
        reserves: &PoolReserves,
        tolerance_bps: u32,
    ) -> AmmResult<()> {
        let required = Self::required_no_amount(yes_amount, reserves)?;

        let deviation = (no_amount as i128 - required as i128).unsigned_abs();
        let allowed = required as u128 * tolerance_bps as u128;

        if deviation * BPS_DENOMINATOR as u128 > allowed {
            debug!(
                yes_amount,
                no_amount, required, tolerance_bps, "Deposit rejected: off pool ratio"
            );
            return Err(AmmError::InvalidRatio {
                provided: no_amount,
                required,
            });
        }

        Ok(())
    }

    /// Quote redeeming `lp_tokens` for a pro-rata share of both reserves
    pub fn quote_removal(
        lp_tokens: u64,
        reserves: &PoolReserves,
        total_lp_supply: u64,
    ) -> AmmResult<RemovalQuote> {
        if lp_tokens == 0 {
            return Err(AmmError::AmountTooSmall {
                amount: 0,
                minimum: 1,
            });
        }
        if total_lp_supply == 0 {
            return Err(AmmError::InsufficientLiquidity {
                reason: "pool has no LP supply",
            });
        }
        if lp_tokens > total_lp_supply {
            return Err(AmmError::InsufficientLiquidity {
                reason: "LP amount exceeds total supply",
            });
        }

        let supply = total_lp_supply as u128;
        // lp_tokens <= supply, so both shares fit in u64
        let yes_amount = reserves.yes_reserve as u128 * lp_tokens as u128 / supply;
        let no_amount = reserves.no_reserve as u128 * lp_tokens as u128 / supply;

        Ok(RemovalQuote {
            yes_amount: to_amount(yes_amount, "removal YES amount")?,
            no_amount: to_amount(no_amount, "removal NO amount")?,
            share_of_pool: Self::percent_of(lp_tokens, total_lp_supply as u128)?,
        })
    }

    fn quote_funded(
        yes_amount: u64,
        no_amount: u64,
        reserves: &PoolReserves,
        total_lp_supply: u64,
    ) -> AmmResult<LiquidityQuote> {
        let lp_tokens = Self::lp_tokens_for_deposit(yes_amount, no_amount, reserves, total_lp_supply)?;
        let supply = Self::effective_supply(reserves, total_lp_supply);

        if lp_tokens == 0 {
            // Smallest YES deposit that mints one LP token
            let minimum = (reserves.yes_reserve as u128).div_ceil(supply as u128);
            debug!(yes_amount, minimum, "Deposit rejected: mints zero LP tokens");
            return Err(AmmError::AmountTooSmall {
                amount: yes_amount,
                minimum: to_amount(minimum, "minimum deposit")?,
            });
        }

        let quote = LiquidityQuote {
            yes_amount,
            no_amount,
            lp_tokens,
            share_of_pool: Self::percent_of(lp_tokens, supply as u128 + lp_tokens as u128)?,
        };

        debug!(?quote, "Deposit quoted");
        Ok(quote)
    }

    fn bootstrap_quote(yes_amount: u64, no_amount: u64) -> LiquidityQuote {
        LiquidityQuote {
            yes_amount,
            no_amount,
            lp_tokens: yes_amount.min(no_amount),
            share_of_pool: 100.0,
        }
    }

    fn check_minimum(yes_amount: u64, config: &EngineConfig) -> AmmResult<()> {
        if yes_amount < config.min_liquidity_amount {
            return Err(AmmError::AmountTooSmall {
                amount: yes_amount,
                minimum: config.min_liquidity_amount,
            });
        }
        Ok(())
    }

    /// A pool with exactly one funded side has no usable ratio
    fn check_two_sided(yes_amount: u64, reserves: &PoolReserves) -> AmmResult<()> {
        if reserves.yes_reserve == 0 || reserves.no_reserve == 0 {
            return Err(AmmError::InvalidRatio {
                provided: yes_amount,
                required: 0,
            });
        }
        Ok(())
    }

    fn effective_supply(reserves: &PoolReserves, total_lp_supply: u64) -> u64 {
        if total_lp_supply == 0 {
            reserves.yes_reserve
        } else {
            total_lp_supply
        }
    }

    fn percent_of(part: u64, whole: u128) -> AmmResult<f64> {
        let operation = "pool share";
        let share = decimal(part as u128, operation)? / decimal(whole, operation)?;
        Ok(to_display(share * Decimal::ONE_HUNDRED))
    }
}
