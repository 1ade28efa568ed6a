//! Outcome price and probability derivation from pool reserves
//!
//! Each side's price is its reserve's share of the pool total. The NO price
//! is derived as `1.0 - yes` so the pair always sums to one.

use amm_config::engine::PRICE_SUM_EPSILON;
use types::{AmmResult, PoolReserves, Price, Probabilities};

/// Price calculations for a binary outcome pool
pub struct PriceMath;

impl PriceMath {
    /// Calculate display prices for both outcomes
    ///
    /// An empty pool prices both sides at exactly 0.5.
    pub fn calculate_prices(reserves: &PoolReserves) -> AmmResult<Price> {
        let total = reserves.total();
        if total == 0 {
            return Ok(Price::NO_LIQUIDITY);
        }

        // Single IEEE division: correctly rounded, identical on every platform
        let yes = reserves.yes_reserve as f64 / total as f64;

        Ok(Price { yes, no: 1.0 - yes })
    }

    /// Calculate integer percentages summing to exactly 100
    ///
    /// YES is the displayed YES price rounded to a whole percent; NO is the
    /// remainder.
    pub fn calculate_probabilities(reserves: &PoolReserves) -> AmmResult<Probabilities> {
        let price = Self::calculate_prices(reserves)?;

        // price.yes is within [0, 1]
        let yes = (price.yes * 100.0).round() as u32;

        Ok(Probabilities { yes, no: 100 - yes })
    }

    /// Check that two prices are complementary within [`PRICE_SUM_EPSILON`]
    pub fn validate_complementary_prices(yes: f64, no: f64) -> bool {
        (yes + no - 1.0).abs() < PRICE_SUM_EPSILON
    }
}
