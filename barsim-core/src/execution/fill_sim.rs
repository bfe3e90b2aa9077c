//! Fill simulator: pure fill model with commission and slippage.
//!
//! A deliberate no-lookahead policy: market orders see only the bar close
//! (no intrabar information), while limit orders are checked against the
//! whole bar range with inclusive bounds. A limit exactly equal to the bar
//! extreme is assumed executable — at least one tick touched it.

use crate::domain::{Bar, FillOutcome, OrderKind, OrderRequest, OrderSide};
use serde::{Deserialize, Serialize};

/// Pure fill calculator, configured once and shared across all calls.
///
/// Stateless after construction; safe to share read-only across replay
/// instances. Inputs are trusted preconditions (validated at the feed and
/// order-construction boundaries), so every method is a total function.
///
/// Zero commission and zero slippage are first-class configurations, not
/// special cases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FillSimulator {
    /// Commission as a fraction of notional (0.001 = 0.1%).
    pub commission_rate: f64,
    /// Slippage in basis points, applied only to market orders.
    pub slippage_bps: f64,
}

impl FillSimulator {
    pub fn new(commission_rate: f64, slippage_bps: f64) -> Self {
        Self {
            commission_rate,
            slippage_bps,
        }
    }

    /// Dispatch on order kind.
    pub fn simulate(&self, order: &OrderRequest, bar: &Bar) -> FillOutcome {
        match order.kind {
            OrderKind::Market => self.simulate_market_order(order.side, order.quantity, bar),
            OrderKind::Limit { limit_price } => {
                self.simulate_limit_order(order.side, order.quantity, limit_price, bar)
            }
        }
    }

    /// Market order: always fills at the close, slipped adversely.
    ///
    /// Buys pay up, sells receive less:
    /// buy `close × (1 + bps/10_000)`, sell `close × (1 − bps/10_000)`.
    /// Commission is levied on the slipped notional.
    pub fn simulate_market_order(&self, side: OrderSide, quantity: f64, bar: &Bar) -> FillOutcome {
        let slip = self.slippage_bps / 10_000.0;
        let fill_price = match side {
            OrderSide::Buy => bar.close * (1.0 + slip),
            OrderSide::Sell => bar.close * (1.0 - slip),
        };
        let commission = quantity * fill_price * self.commission_rate;
        FillOutcome::filled(fill_price, quantity, commission)
    }

    /// Limit order: rests for exactly one bar, fills at the limit price iff
    /// the bar's range touched it (inclusive bounds), with zero slippage —
    /// that is the economic meaning of a limit order.
    pub fn simulate_limit_order(
        &self,
        side: OrderSide,
        quantity: f64,
        limit_price: f64,
        bar: &Bar,
    ) -> FillOutcome {
        let touched = match side {
            OrderSide::Buy => bar.low <= limit_price,
            OrderSide::Sell => bar.high >= limit_price,
        };
        if !touched {
            return FillOutcome::none();
        }
        let commission = quantity * limit_price * self.commission_rate;
        FillOutcome::filled(limit_price, quantity, commission)
    }
}
