//! Buy-and-hold: one market buy on the first bar, then nothing.

use crate::domain::{Bar, OrderRequest, OrderSide, Portfolio};
use crate::strategy::Strategy;

/// Buys as many whole shares as a fraction of starting cash affords on the
/// first bar, then holds to the end of the replay.
#[derive(Debug, Clone)]
pub struct BuyAndHold {
    /// Fraction of cash to deploy (leaves headroom for slippage and
    /// commission at 1.0 minus a margin).
    size_fraction: f64,
    invested: bool,
}

impl BuyAndHold {
    pub fn new() -> Self {
        Self {
            size_fraction: 0.99,
            invested: false,
        }
    }

    pub fn with_size_fraction(size_fraction: f64) -> Self {
        Self {
            size_fraction,
            invested: false,
        }
    }
}

impl Default for BuyAndHold {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for BuyAndHold {
    fn name(&self) -> &str {
        "buy_and_hold"
    }

    fn on_bar(&mut self, bars: &[Bar], index: usize, portfolio: &Portfolio) -> Vec<OrderRequest> {
        if self.invested {
            return Vec::new();
        }
        let close = bars[index].close;
        if close <= 0.0 {
            return Vec::new();
        }
        let quantity = (portfolio.cash * self.size_fraction / close).floor();
        if quantity < 1.0 {
            return Vec::new();
        }
        self.invested = true;
        match OrderRequest::market(OrderSide::Buy, quantity) {
            Ok(order) => vec![order],
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn bars(closes: &[f64]) -> Vec<Bar> {
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                symbol: "SPY".into(),
                timestamp: start + Duration::days(i as i64),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1_000.0,
            })
            .collect()
    }

    #[test]
    fn buys_once_on_first_bar() {
        let mut strategy = BuyAndHold::new();
        let bars = bars(&[100.0, 101.0]);
        let portfolio = Portfolio::new(10_000.0);

        let first = strategy.on_bar(&bars[..1], 0, &portfolio);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].side, OrderSide::Buy);
        assert_eq!(first[0].quantity, 99.0); // floor(9900 / 100)

        let second = strategy.on_bar(&bars, 1, &portfolio);
        assert!(second.is_empty());
    }

    #[test]
    fn does_nothing_when_cash_cannot_afford_a_share() {
        let mut strategy = BuyAndHold::new();
        let bars = bars(&[100.0]);
        let portfolio = Portfolio::new(50.0);
        assert!(strategy.on_bar(&bars, 0, &portfolio).is_empty());
    }
}
