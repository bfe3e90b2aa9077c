//! Portfolio — aggregate state of cash + all open positions.

use super::fill::FillOutcome;
use super::order::OrderSide;
use super::position::Position;
use std::collections::HashMap;

/// Aggregate portfolio state.
///
/// Tracks cash, open positions, and accumulated commission. The equity
/// accounting identity must hold at every bar:
/// `equity == cash + sum(position market values)`.
///
/// Positions are keyed uniquely by symbol, so no position is ever counted
/// twice in the equity sum.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub cash: f64,
    pub initial_capital: f64,
    pub positions: HashMap<String, Position>,
    pub total_commission: f64,
}

impl Portfolio {
    pub fn new(initial_capital: f64) -> Self {
        Self {
            cash: initial_capital,
            initial_capital,
            positions: HashMap::new(),
            total_commission: 0.0,
        }
    }

    /// Apply a completed fill to cash and positions.
    ///
    /// Buys spend notional plus commission; sells receive notional minus
    /// commission. Average entry price is maintained on adds and left
    /// unchanged on reductions. Positions that go flat are removed.
    ///
    /// Non-fills are a no-op.
    pub fn apply_fill(&mut self, symbol: &str, side: OrderSide, fill: &FillOutcome) {
        if !fill.filled {
            return;
        }

        match side {
            OrderSide::Buy => {
                self.cash -= fill.notional() + fill.commission;
                let pos = self
                    .positions
                    .entry(symbol.to_string())
                    .or_insert_with(|| Position::new(symbol.to_string(), 0.0, 0.0));
                let new_quantity = pos.quantity + fill.quantity;
                pos.avg_entry_price = (pos.quantity * pos.avg_entry_price
                    + fill.quantity * fill.fill_price)
                    / new_quantity;
                pos.quantity = new_quantity;
            }
            OrderSide::Sell => {
                self.cash += fill.notional() - fill.commission;
                if let Some(pos) = self.positions.get_mut(symbol) {
                    pos.quantity -= fill.quantity;
                    if pos.is_flat() {
                        self.positions.remove(symbol);
                    }
                }
            }
        }
        self.total_commission += fill.commission;
    }

    /// Quantity currently held in a symbol (0 if none).
    pub fn quantity(&self, symbol: &str) -> f64 {
        self.positions.get(symbol).map_or(0.0, |p| p.quantity)
    }

    /// Total equity = cash + sum of all position market values.
    pub fn equity(&self, prices: &HashMap<String, f64>) -> f64 {
        let position_value: f64 = self
            .positions
            .iter()
            .map(|(sym, pos)| {
                let price = prices.get(sym).copied().unwrap_or(pos.avg_entry_price);
                pos.market_value(price)
            })
            .sum();
        self.cash + position_value
    }
}
