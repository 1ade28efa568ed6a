//! # Outcome AMM Configuration
//!
//! Constants and tunable settings for the outcome AMM calculators.
//!
//! ## Features
//!
//! - **Engine Constants**: fee schedule, price impact ceiling, deposit minimum, token scale
//! - **Engine Configuration**: [`EngineConfig`] loaded from TOML and `AMM_*` environment variables
//!
//! ## Usage
//!
//! ```rust
//! use amm_config::{engine, EngineConfig};
//!
//! let fee = engine::fees::DEFAULT_FEE_BPS;
//! let config = EngineConfig::default();
//! assert_eq!(config.fee_bps, fee);
//! ```

pub mod engine;
pub mod engine_config;

pub use engine_config::EngineConfig;
