//! # Outcome AMM Types
//!
//! Data model shared by the outcome AMM calculators and their callers.
//!
//! ## Design Philosophy
//!
//! - **Raw Amounts Are Integers**: reserves, fees and quote amounts are u64
//!   fixed-point values (scaled by `10^6` for the outcome tokens)
//! - **Validated Construction**: negative reserves are rejected at the signed
//!   boundary and are unrepresentable afterwards
//! - **Typed Errors**: every caller-input failure is an [`AmmError`] with a
//!   stable [`ErrorCode`]
//! - **Clear Boundaries**: explicit conversion points between display `f64`
//!   and raw fixed-point
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{to_display_units, PoolReserves, QuoteResponse};
//!
//! let reserves = PoolReserves::try_from_signed(400_000, 600_000).unwrap();
//! assert_eq!(to_display_units(reserves.yes_reserve, 6), 0.4);
//!
//! let response: QuoteResponse<u64> = Ok::<_, types::AmmError>(reserves.no_reserve).into();
//! assert!(response.success);
//! ```

pub mod common;
pub mod market;
pub mod quotes;
pub mod response;

pub use common::errors::{AmmError, AmmResult, ErrorCode, ErrorDetail};
pub use common::fixed_point::{
    format_display_units, parse_display_units, to_display_units, to_raw_units, MAX_DECIMALS,
    MAX_EXACT_RAW,
};
pub use market::{Outcome, PoolReserves, Price, Probabilities};
pub use quotes::{LiquidityQuote, RemovalQuote, SwapQuote};
pub use response::QuoteResponse;
