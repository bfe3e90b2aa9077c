//! Order requests — the ephemeral intent consumed by one fill simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

/// What kind of order and its price parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OrderKind {
    /// Fill at the bar's close, adjusted for slippage.
    Market,
    /// Fill at the limit price iff the bar's range touches it.
    Limit { limit_price: f64 },
}

/// A rejected order request, with the offending field and value.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order quantity must be > 0 (got {0})")]
    NonPositiveQuantity(f64),
    #[error("limit price must be > 0 (got {0})")]
    NonPositiveLimitPrice(f64),
}

/// One order intent: side, quantity, kind.
///
/// Constructed by the driver from a strategy's intent, consumed by exactly
/// one fill-simulation call. The validating constructors are the input
/// boundary: a value that exists is well-formed, so the simulator never
/// re-checks it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub side: OrderSide,
    pub quantity: f64,
    pub kind: OrderKind,
}

impl OrderRequest {
    /// A market order. Rejects non-positive quantity.
    pub fn market(side: OrderSide, quantity: f64) -> Result<Self, OrderError> {
        if !(quantity > 0.0) {
            return Err(OrderError::NonPositiveQuantity(quantity));
        }
        Ok(Self {
            side,
            quantity,
            kind: OrderKind::Market,
        })
    }

    /// A limit order. Rejects non-positive quantity or limit price.
    pub fn limit(side: OrderSide, quantity: f64, limit_price: f64) -> Result<Self, OrderError> {
        if !(quantity > 0.0) {
            return Err(OrderError::NonPositiveQuantity(quantity));
        }
        if !(limit_price > 0.0) {
            return Err(OrderError::NonPositiveLimitPrice(limit_price));
        }
        Ok(Self {
            side,
            quantity,
            kind: OrderKind::Limit { limit_price },
        })
    }
}
