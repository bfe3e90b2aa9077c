//! Open holdings as the portfolio tracks them between fills.

use serde::{Deserialize, Serialize};

/// A holding in one symbol: quantity held and the volume-weighted average
/// price paid to build it.
///
/// Long-only replay keeps `quantity >= 0`; a fully exited position drops to
/// zero and is pruned by the portfolio rather than lingering at flat. The
/// average entry is maintained across partial buys so unrealized P&L always
/// measures against what was actually paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub quantity: f64,
    pub avg_entry_price: f64,
}

impl Position {
    pub fn new(symbol: String, quantity: f64, avg_entry_price: f64) -> Self {
        Self {
            symbol,
            quantity,
            avg_entry_price,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.quantity == 0.0
    }

    pub fn market_value(&self, current_price: f64) -> f64 {
        self.quantity * current_price
    }

    pub fn unrealized_pnl(&self, current_price: f64) -> f64 {
        self.quantity * (current_price - self.avg_entry_price)
    }
}
