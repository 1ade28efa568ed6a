//! Quote results returned to trade and liquidity forms
//!
//! Amount fields are raw fixed-point integers and may be submitted on-chain.
//! `f64` fields are percentages for display only.

use serde::{Deserialize, Serialize};

/// Single-sided swap quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuote {
    pub output_amount: u64,
    pub fee: u64,
    /// Percent deviation of execution price from pre-trade spot price
    pub price_impact: f64,
    /// `output_amount` less slippage tolerance, rounded down
    pub minimum_output: u64,
}

/// Add-liquidity quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityQuote {
    pub yes_amount: u64,
    pub no_amount: u64,
    /// LP tokens the deposit would mint
    pub lp_tokens: u64,
    /// Percent of the pool owned by the deposit afterwards, in (0, 100]
    pub share_of_pool: f64,
}

/// Remove-liquidity quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalQuote {
    pub yes_amount: u64,
    pub no_amount: u64,
    /// Percent of the pool being redeemed
    pub share_of_pool: f64,
}
