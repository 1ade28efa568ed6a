//! Error types for reserve validation and quote calculation
//!
//! Every caller-input failure in the engine is returned as an [`AmmError`].
//! Each variant maps to a stable [`ErrorCode`] that UIs key their inline
//! validation messages on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result alias used by every fallible engine function
pub type AmmResult<T> = Result<T, AmmError>;

/// Stable, wire-visible error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidYesReserve,
    InvalidNoReserve,
    ExcessivePriceImpact,
    AmountTooSmall,
    InvalidRatio,
    InsufficientLiquidity,
    InvalidAmount,
    ArithmeticOverflow,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidYesReserve => "INVALID_YES_RESERVE",
            ErrorCode::InvalidNoReserve => "INVALID_NO_RESERVE",
            ErrorCode::ExcessivePriceImpact => "EXCESSIVE_PRICE_IMPACT",
            ErrorCode::AmountTooSmall => "AMOUNT_TOO_SMALL",
            ErrorCode::InvalidRatio => "INVALID_RATIO",
            ErrorCode::InsufficientLiquidity => "INSUFFICIENT_LIQUIDITY",
            ErrorCode::InvalidAmount => "INVALID_AMOUNT",
            ErrorCode::ArithmeticOverflow => "ARITHMETIC_OVERFLOW",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by reserve validation, unit conversion and quoting
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AmmError {
    /// YES reserve is negative or does not fit in a raw u64 amount
    #[error("Invalid YES reserve: {value} (must be within 0..={max})", max = u64::MAX)]
    InvalidYesReserve { value: i128 },

    /// NO reserve is negative or does not fit in a raw u64 amount
    #[error("Invalid NO reserve: {value} (must be within 0..={max})", max = u64::MAX)]
    InvalidNoReserve { value: i128 },

    /// Trade would move the price further than the configured ceiling
    #[error("Price impact {impact}% exceeds maximum allowed {max}%")]
    ExcessivePriceImpact { impact: Decimal, max: Decimal },

    /// Amount is below the smallest meaningful unit for the operation
    #[error("Amount {amount} is below minimum {minimum}")]
    AmountTooSmall { amount: u64, minimum: u64 },

    /// Deposit does not match the pool ratio within tolerance
    #[error("Amount {provided} does not match pool ratio (required {required})")]
    InvalidRatio { provided: u64, required: u64 },

    /// Pool cannot serve the request with its current reserves
    #[error("Insufficient liquidity: {reason}")]
    InsufficientLiquidity { reason: &'static str },

    /// Display value cannot be converted to raw units
    #[error("Invalid amount: {value}")]
    InvalidAmount { value: String },

    /// Intermediate or final value exceeded its integer range
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl AmmError {
    /// Stable code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AmmError::InvalidYesReserve { .. } => ErrorCode::InvalidYesReserve,
            AmmError::InvalidNoReserve { .. } => ErrorCode::InvalidNoReserve,
            AmmError::ExcessivePriceImpact { .. } => ErrorCode::ExcessivePriceImpact,
            AmmError::AmountTooSmall { .. } => ErrorCode::AmountTooSmall,
            AmmError::InvalidRatio { .. } => ErrorCode::InvalidRatio,
            AmmError::InsufficientLiquidity { .. } => ErrorCode::InsufficientLiquidity,
            AmmError::InvalidAmount { .. } => ErrorCode::InvalidAmount,
            AmmError::Overflow { .. } => ErrorCode::ArithmeticOverflow,
        }
    }

    /// Wire form of this error
    pub fn detail(&self) -> ErrorDetail {
        ErrorDetail {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// `{ code, message }` pair carried by a failed [`QuoteResponse`](crate::QuoteResponse)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_codes_match_wire_names() {
        let err = AmmError::ExcessivePriceImpact {
            impact: dec!(83.3),
            max: dec!(30),
        };
        assert_eq!(err.code(), ErrorCode::ExcessivePriceImpact);

        let json = serde_json::to_string(&err.code()).unwrap();
        assert_eq!(json, format!("\"{}\"", err.code().as_str()));
    }

    #[test]
    fn test_detail_carries_message() {
        let err = AmmError::AmountTooSmall {
            amount: 100,
            minimum: 1_000,
        };
        let detail = err.detail();
        assert_eq!(detail.code, ErrorCode::AmountTooSmall);
        assert_eq!(detail.message, "Amount 100 is below minimum 1000");
    }
}
