//! Engine Configuration Module
//!
//! Provides the tunable settings of the outcome AMM calculators.
//! Supports loading from a TOML file with `AMM_*` environment overrides.
//! Missing keys fall back to the constants in [`crate::engine`].

use crate::engine;
use anyhow::{bail, Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Tunable settings for quote calculation
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Swap fee on the input amount in basis points
    pub fee_bps: u32,

    /// Slippage tolerance applied to `minimum_output` in basis points
    pub slippage_tolerance_bps: u32,

    /// Price impact ceiling in basis points of percent (3_000 = 30%)
    pub max_price_impact_bps: u32,

    /// Smallest accepted YES deposit in raw units
    pub min_liquidity_amount: u64,

    /// Allowed deviation from pool ratio on the strict deposit path
    pub ratio_tolerance_bps: u32,

    /// Decimals of the outcome tokens
    pub token_decimals: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fee_bps: engine::DEFAULT_FEE_BPS,
            slippage_tolerance_bps: engine::DEFAULT_SLIPPAGE_TOLERANCE_BPS,
            max_price_impact_bps: engine::MAX_PRICE_IMPACT_BPS,
            min_liquidity_amount: engine::MIN_LIQUIDITY_AMOUNT,
            ratio_tolerance_bps: engine::DEFAULT_RATIO_TOLERANCE_BPS,
            token_decimals: engine::TOKEN_DECIMALS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from an optional TOML file with environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            if path.exists() {
                info!("Loading engine config: {:?}", path);
                builder = builder.add_source(File::from(path).required(true));
            } else {
                warn!("Engine config not found, using defaults: {:?}", path);
            }
        }

        // Override with environment variables (AMM_ prefix)
        builder = builder.add_source(Environment::with_prefix("AMM").try_parsing(true));

        let config: Self = builder
            .build()
            .context("Failed to build engine configuration")?
            .try_deserialize()
            .context("Failed to deserialize engine configuration")?;

        config.validate()?;
        debug!(?config, "Engine configuration loaded");
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse engine config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the calculators cannot honor
    pub fn validate(&self) -> Result<()> {
        let bps = engine::BPS_DENOMINATOR;

        if self.fee_bps as u64 >= bps {
            bail!("fee_bps must be below {}, got {}", bps, self.fee_bps);
        }
        if self.slippage_tolerance_bps as u64 > bps {
            bail!(
                "slippage_tolerance_bps must be at most {}, got {}",
                bps,
                self.slippage_tolerance_bps
            );
        }
        if self.max_price_impact_bps == 0 || self.max_price_impact_bps as u64 > bps {
            bail!(
                "max_price_impact_bps must be within 1..={}, got {}",
                bps,
                self.max_price_impact_bps
            );
        }
        if self.ratio_tolerance_bps as u64 > bps {
            bail!(
                "ratio_tolerance_bps must be at most {}, got {}",
                bps,
                self.ratio_tolerance_bps
            );
        }
        if self.token_decimals > 19 {
            bail!("token_decimals must be at most 19, got {}", self.token_decimals);
        }

        Ok(())
    }
}
