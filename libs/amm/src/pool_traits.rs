//! Pool trait definitions for a unified outcome-pool interface

use crate::{LiquidityMath, PriceMath, SwapMath, TradeSizer};
use amm_config::EngineConfig;
use types::{
    to_display_units, to_raw_units, AmmResult, LiquidityQuote, Outcome, PoolReserves, Price,
    Probabilities, RemovalQuote, SwapQuote,
};

/// Unified pool interface for quote callers
///
/// Implementors supply a reserve snapshot and settings; the provided methods
/// route to the calculators with the correct reserve orientation.
pub trait OutcomePool {
    /// Current reserves
    fn reserves(&self) -> PoolReserves;

    /// Outstanding LP tokens
    fn total_lp_supply(&self) -> u64;

    /// Engine settings used for quotes
    fn config(&self) -> &EngineConfig;

    /// `(yes, no)` reserves in display units at the configured token decimals
    fn display_reserves(&self) -> (f64, f64) {
        let reserves = self.reserves();
        let decimals = self.config().token_decimals;
        (
            to_display_units(reserves.yes_reserve, decimals),
            to_display_units(reserves.no_reserve, decimals),
        )
    }

    /// Raw amount for a display value typed into a quote form
    fn raw_amount(&self, display: f64) -> AmmResult<u64> {
        to_raw_units(display, self.config().token_decimals)
    }

    fn prices(&self) -> AmmResult<Price> {
        PriceMath::calculate_prices(&self.reserves())
    }

    fn probabilities(&self) -> AmmResult<Probabilities> {
        PriceMath::calculate_probabilities(&self.reserves())
    }

    /// Quote paying `amount_in` of `input` for the opposite outcome
    fn swap_quote(&self, input: Outcome, amount_in: u64) -> AmmResult<SwapQuote> {
        let (reserve_in, reserve_out) = self.reserves().swap_orientation(input);
        SwapMath::quote(amount_in, reserve_in, reserve_out, self.config())
    }

    /// Quote the input of `input` needed to receive `amount_out` of the opposite outcome
    fn swap_quote_for_output(&self, input: Outcome, amount_out: u64) -> AmmResult<SwapQuote> {
        let (reserve_in, reserve_out) = self.reserves().swap_orientation(input);
        SwapMath::quote_for_output(amount_out, reserve_in, reserve_out, self.config())
    }

    /// Largest `input` amount accepted under the impact ceiling
    fn max_swap_input(&self, input: Outcome) -> AmmResult<u64> {
        let (reserve_in, reserve_out) = self.reserves().swap_orientation(input);
        TradeSizer::new(self.config().clone()).max_input_within_impact(reserve_in, reserve_out)
    }

    fn liquidity_quote(&self, yes_amount: u64) -> AmmResult<LiquidityQuote> {
        LiquidityMath::quote_deposit(
            yes_amount,
            &self.reserves(),
            self.total_lp_supply(),
            self.config(),
        )
    }

    fn removal_quote(&self, lp_tokens: u64) -> AmmResult<RemovalQuote> {
        LiquidityMath::quote_removal(lp_tokens, &self.reserves(), self.total_lp_supply())
    }
}

/// Point-in-time pool state as read from chain
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoolSnapshot {
    pub reserves: PoolReserves,
    pub total_lp_supply: u64,
    pub config: EngineConfig,
}

impl PoolSnapshot {
    pub fn new(reserves: PoolReserves, total_lp_supply: u64) -> Self {
        Self {
            reserves,
            total_lp_supply,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }
}

impl OutcomePool for PoolSnapshot {
    fn reserves(&self) -> PoolReserves {
        self.reserves
    }

    fn total_lp_supply(&self) -> u64 {
        self.total_lp_supply
    }

    fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_orientation_follows_input_side() {
        let pool = PoolSnapshot::new(PoolReserves::new(1_000_000, 3_000_000), 1_000_000);

        let yes_in = pool.swap_quote(Outcome::Yes, 100_000).unwrap();
        let no_in = pool.swap_quote(Outcome::No, 100_000).unwrap();

        assert_eq!(
            yes_in.output_amount,
            SwapMath::calculate_output_amount(100_000, 1_000_000, 3_000_000, 30).unwrap()
        );
        assert_eq!(
            no_in.output_amount,
            SwapMath::calculate_output_amount(100_000, 3_000_000, 1_000_000, 30).unwrap()
        );
        assert!(yes_in.price_impact > no_in.price_impact);
    }

    #[test]
    fn test_snapshot_config_is_used() {
        let pool = PoolSnapshot::new(PoolReserves::new(1_000_000, 1_000_000), 1_000_000)
            .with_config(EngineConfig {
                fee_bps: 0,
                ..EngineConfig::default()
            });
        assert_eq!(pool.swap_quote(Outcome::Yes, 100_000).unwrap().fee, 0);

        let max = pool.max_swap_input(Outcome::No).unwrap();
        assert!(pool.swap_quote(Outcome::No, max).is_ok());
    }

    #[test]
    fn test_display_units_follow_token_decimals() {
        let pool = PoolSnapshot::new(PoolReserves::new(1_500_000, 250_000), 1_500_000);
        assert_eq!(pool.display_reserves(), (1.5, 0.25));
        assert_eq!(pool.raw_amount(0.1).unwrap(), 100_000);

        let pool = pool.with_config(EngineConfig {
            token_decimals: 9,
            ..EngineConfig::default()
        });
        assert_eq!(pool.display_reserves(), (0.0015, 0.00025));
        assert_eq!(pool.raw_amount(0.1).unwrap(), 100_000_000);

        let amount_in = pool.raw_amount(0.0001).unwrap();
        assert_eq!(amount_in, 100_000);
        assert!(pool.swap_quote(Outcome::Yes, amount_in).is_ok());
    }

    #[test]
    fn test_liquidity_round_trip_through_trait() {
        let pool = PoolSnapshot::new(PoolReserves::new(400_000, 600_000), 500_000);
        let deposit = pool.liquidity_quote(100_000).unwrap();
        let removal = pool.removal_quote(deposit.lp_tokens).unwrap();
        assert_eq!(removal.yes_amount, 100_000);
        assert_eq!(removal.no_amount, 150_000);
    }
}
