//! # Outcome AMM - Binary Market Pricing Engine
//!
//! ## Purpose
//!
//! Pure calculation library for a two-asset (YES/NO) constant-product market
//! maker. Computes display prices, swap quotes and liquidity quotes from a
//! caller-supplied reserve snapshot. Quoted amounts must agree with the
//! on-chain pool program that settles them, so every amount uses integer
//! arithmetic with an explicit rounding direction.
//!
//! ## Integration Points
//!
//! - **Input Sources**: `PoolReserves` snapshots from the on-chain reserve reader
//! - **Output Destinations**: trade quote forms, liquidity forms, market ranking
//! - **Error Contract**: every function returns [`AmmResult`]; callers render
//!   failures by [`ErrorCode`] or wrap them in a [`QuoteResponse`]
//! - **Precision**: raw amounts are u64 scaled by `10^6`; `f64` appears only in
//!   display fields (prices, impact, pool share)
//!
//! ## Architecture Role
//!
//! ```text
//! PoolReserves ──► PriceMath ──────► Price / Probabilities
//!              ├─► SwapMath ───────► SwapQuote
//!              ├─► LiquidityMath ──► LiquidityQuote / RemovalQuote
//!              └─► TradeSizer ─────► max input under impact ceiling
//! ```
//!
//! No function holds state, performs I/O or blocks; all are safe to call
//! concurrently and return identical results for identical inputs.

pub mod liquidity_math;
pub mod pool_traits;
pub mod price_math;
mod ratio;
pub mod swap_math;
pub mod trade_sizing;

pub use liquidity_math::LiquidityMath;
pub use pool_traits::{OutcomePool, PoolSnapshot};
pub use price_math::PriceMath;
pub use swap_math::SwapMath;
pub use trade_sizing::TradeSizer;

pub use amm_config::EngineConfig;
pub use types::{
    format_display_units, parse_display_units, to_display_units, to_raw_units, AmmError,
    AmmResult, ErrorCode, ErrorDetail, LiquidityQuote, Outcome, PoolReserves, Price,
    Probabilities, QuoteResponse, RemovalQuote, SwapQuote, MAX_EXACT_RAW,
};

/// Common types for ratio fields
pub use rust_decimal::Decimal;

/// Calculate YES/NO display prices; an empty pool prices both at 0.5
pub fn calculate_prices(reserves: &PoolReserves) -> AmmResult<Price> {
    PriceMath::calculate_prices(reserves)
}

/// Calculate integer YES/NO percentages summing to exactly 100
pub fn calculate_probabilities(reserves: &PoolReserves) -> AmmResult<Probabilities> {
    PriceMath::calculate_probabilities(reserves)
}

/// Quote a swap with the default fee, impact ceiling and slippage tolerance
pub fn calculate_swap_output(
    input_amount: u64,
    input_reserve: u64,
    output_reserve: u64,
) -> AmmResult<SwapQuote> {
    SwapMath::quote(
        input_amount,
        input_reserve,
        output_reserve,
        &EngineConfig::default(),
    )
}

/// Quote the smallest swap that returns at least `output_amount`
pub fn calculate_swap_for_output(
    output_amount: u64,
    input_reserve: u64,
    output_reserve: u64,
) -> AmmResult<SwapQuote> {
    SwapMath::quote_for_output(
        output_amount,
        input_reserve,
        output_reserve,
        &EngineConfig::default(),
    )
}

/// Quote an add-liquidity request of `yes_amount`
///
/// Pass `total_lp_supply = 0` when the supply is unknown.
pub fn calculate_liquidity_quote(
    yes_amount: u64,
    reserves: &PoolReserves,
    total_lp_supply: u64,
) -> AmmResult<LiquidityQuote> {
    LiquidityMath::quote_deposit(
        yes_amount,
        reserves,
        total_lp_supply,
        &EngineConfig::default(),
    )
}

/// Quote redeeming `lp_tokens` from the pool
pub fn calculate_removal_quote(
    lp_tokens: u64,
    reserves: &PoolReserves,
    total_lp_supply: u64,
) -> AmmResult<RemovalQuote> {
    LiquidityMath::quote_removal(lp_tokens, reserves, total_lp_supply)
}

/// Check `|yes + no - 1| < 1e-4`
pub fn validate_complementary_prices(yes: f64, no: f64) -> bool {
    PriceMath::validate_complementary_prices(yes, no)
}
