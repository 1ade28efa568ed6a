//! Outcome AMM engine constants
//!
//! Defaults for the fee schedule, trade limits and token scale. These must
//! match the on-chain pool program; [`crate::EngineConfig`] exposes them as
//! overridable settings.

/// Basis-point denominator (10_000 bps = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Fee schedule
pub mod fees {
    /// Swap fee charged on the input amount (30 bps = 0.3%)
    pub const DEFAULT_FEE_BPS: u32 = 30;

    /// Default slippage tolerance for `minimum_output` (100 bps = 1%)
    pub const DEFAULT_SLIPPAGE_TOLERANCE_BPS: u32 = 100;
}

/// Trade and deposit limits
pub mod limits {
    /// Price impact ceiling for a single swap (3_000 bps = 30%)
    ///
    /// A 20%-of-pool trade lands near 17% impact and must pass; a 5x-pool
    /// trade lands above 80% and must be rejected.
    pub const MAX_PRICE_IMPACT_BPS: u32 = 3_000;

    /// Smallest YES deposit accepted by the liquidity path (0.001 tokens)
    pub const MIN_LIQUIDITY_AMOUNT: u64 = 1_000;

    /// Allowed deviation from the pool ratio on the strict deposit path
    pub const DEFAULT_RATIO_TOLERANCE_BPS: u32 = 50;

    /// Tolerance for `yes + no == 1.0` price checks
    pub const PRICE_SUM_EPSILON: f64 = 1e-4;
}

/// Token scale
pub mod tokens {
    /// Decimals of the YES/NO outcome tokens and collateral
    pub const TOKEN_DECIMALS: u8 = 6;
}

pub use fees::*;
pub use limits::*;
pub use tokens::*;
