//! Pool reserve snapshot and derived price types
//!
//! Reserves arrive from an on-chain reader as raw fixed-point integers. The
//! signed boundary ([`PoolReserves::try_from_signed`] and serde
//! deserialization) is where negative or out-of-range values are rejected;
//! once constructed, a [`PoolReserves`] is always valid.

use crate::common::errors::{AmmError, AmmResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome side of a binary market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Yes,
    No,
}

impl Outcome {
    /// The complementary outcome
    pub fn opposite(self) -> Self {
        match self {
            Outcome::Yes => Outcome::No,
            Outcome::No => Outcome::Yes,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Yes => f.write_str("YES"),
            Outcome::No => f.write_str("NO"),
        }
    }
}

/// YES/NO pool reserves in raw fixed-point units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SignedReserves")]
pub struct PoolReserves {
    pub yes_reserve: u64,
    pub no_reserve: u64,
}

/// Wire shape accepted before validation
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignedReserves {
    yes_reserve: i128,
    no_reserve: i128,
}

impl TryFrom<SignedReserves> for PoolReserves {
    type Error = AmmError;

    fn try_from(raw: SignedReserves) -> AmmResult<Self> {
        PoolReserves::try_from_signed(raw.yes_reserve, raw.no_reserve)
    }
}

impl PoolReserves {
    /// Empty pool (no liquidity yet)
    pub const EMPTY: Self = Self {
        yes_reserve: 0,
        no_reserve: 0,
    };

    pub const fn new(yes_reserve: u64, no_reserve: u64) -> Self {
        Self {
            yes_reserve,
            no_reserve,
        }
    }

    /// Validate signed reserve values, YES first
    pub fn try_from_signed(yes_reserve: i128, no_reserve: i128) -> AmmResult<Self> {
        let yes = u64::try_from(yes_reserve)
            .map_err(|_| AmmError::InvalidYesReserve { value: yes_reserve })?;
        let no = u64::try_from(no_reserve)
            .map_err(|_| AmmError::InvalidNoReserve { value: no_reserve })?;
        Ok(Self::new(yes, no))
    }

    /// Sum of both reserves (never overflows)
    pub fn total(&self) -> u128 {
        self.yes_reserve as u128 + self.no_reserve as u128
    }

    pub fn is_empty(&self) -> bool {
        self.yes_reserve == 0 && self.no_reserve == 0
    }

    pub fn reserve(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Yes => self.yes_reserve,
            Outcome::No => self.no_reserve,
        }
    }

    /// `(input_reserve, output_reserve)` for a swap paying in `input`
    pub fn swap_orientation(&self, input: Outcome) -> (u64, u64) {
        (self.reserve(input), self.reserve(input.opposite()))
    }
}

/// Display prices for both outcomes; `yes + no == 1.0` within epsilon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub yes: f64,
    pub no: f64,
}

impl Price {
    /// Convention for a pool without liquidity
    pub const NO_LIQUIDITY: Self = Self { yes: 0.5, no: 0.5 };

    pub fn of(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Yes => self.yes,
            Outcome::No => self.no,
        }
    }
}

/// Integer percentages; `yes + no == 100` exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Probabilities {
    pub yes: u32,
    pub no: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    #[test]
    fn test_signed_validation_order() {
        let err = PoolReserves::try_from_signed(-1, -1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidYesReserve);

        let err = PoolReserves::try_from_signed(10, -5).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidNoReserve);

        let err = PoolReserves::try_from_signed(u64::MAX as i128 + 1, 0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidYesReserve);

        let ok = PoolReserves::try_from_signed(400_000, 600_000).unwrap();
        assert_eq!(ok, PoolReserves::new(400_000, 600_000));
    }

    #[test]
    fn test_deserialize_rejects_negative_reserves() {
        let ok: PoolReserves =
            serde_json::from_str(r#"{"yesReserve":1000000,"noReserve":2000000}"#).unwrap();
        assert_eq!(ok.total(), 3_000_000);

        let err = serde_json::from_str::<PoolReserves>(r#"{"yesReserve":5,"noReserve":-1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid NO reserve"));
    }

    #[test]
    fn test_swap_orientation() {
        let reserves = PoolReserves::new(100, 300);
        assert_eq!(reserves.swap_orientation(Outcome::Yes), (100, 300));
        assert_eq!(reserves.swap_orientation(Outcome::No), (300, 100));
        assert!(PoolReserves::EMPTY.is_empty());
    }
}
