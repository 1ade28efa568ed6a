//! `{ success, data | errors }` envelope for the UI boundary

use crate::common::errors::{AmmResult, ErrorDetail};
use serde::{Deserialize, Serialize};

/// Serializable form of an [`AmmResult`]
///
/// Success serializes as `{"success":true,"data":...}`, failure as
/// `{"success":false,"errors":[{"code":...,"message":...}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct QuoteResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorDetail>,
}

impl<T> QuoteResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            data: None,
            errors,
        }
    }
}

impl<T> From<AmmResult<T>> for QuoteResponse<T> {
    fn from(result: AmmResult<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::failed(vec![err.detail()]),
        }
    }
}
