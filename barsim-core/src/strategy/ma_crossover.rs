//! Moving-average crossover strategy.
//!
//! Classic long-only trend following:
//! - Buy when the short SMA crosses above the long SMA
//! - Sell the whole position when it crosses back below

use crate::domain::{Bar, OrderRequest, OrderSide, Portfolio};
use crate::strategy::Strategy;

/// Short/long simple-moving-average crossover, long-only.
#[derive(Debug, Clone)]
pub struct MaCrossover {
    short_period: usize,
    long_period: usize,
    size_fraction: f64,
}

impl MaCrossover {
    /// `short_period` must be > 0 and < `long_period`.
    pub fn new(short_period: usize, long_period: usize) -> Self {
        assert!(short_period > 0, "short_period must be > 0");
        assert!(
            long_period > short_period,
            "long_period must be > short_period"
        );
        Self {
            short_period,
            long_period,
            size_fraction: 0.99,
        }
    }

    /// Simple moving average of closes over the trailing `period` bars.
    fn sma(bars: &[Bar], period: usize) -> Option<f64> {
        if bars.len() < period {
            return None;
        }
        let recent = &bars[bars.len() - period..];
        Some(recent.iter().map(|b| b.close).sum::<f64>() / period as f64)
    }

    /// Some(true) on a bullish cross, Some(false) on a bearish cross,
    /// None when no cross happened on the latest bar.
    fn detect_cross(&self, bars: &[Bar]) -> Option<bool> {
        if bars.len() < self.long_period + 1 {
            return None;
        }
        let short_now = Self::sma(bars, self.short_period)?;
        let long_now = Self::sma(bars, self.long_period)?;
        let prev = &bars[..bars.len() - 1];
        let short_prev = Self::sma(prev, self.short_period)?;
        let long_prev = Self::sma(prev, self.long_period)?;

        if short_prev <= long_prev && short_now > long_now {
            Some(true)
        } else if short_prev >= long_prev && short_now < long_now {
            Some(false)
        } else {
            None
        }
    }
}

impl Strategy for MaCrossover {
    fn name(&self) -> &str {
        "ma_crossover"
    }

    fn on_bar(&mut self, bars: &[Bar], index: usize, portfolio: &Portfolio) -> Vec<OrderRequest> {
        let visible = &bars[..=index];
        let symbol = &visible[index].symbol;
        let close = visible[index].close;

        match self.detect_cross(visible) {
            Some(true) if portfolio.quantity(symbol) == 0.0 && close > 0.0 => {
                let quantity = (portfolio.cash * self.size_fraction / close).floor();
                if quantity < 1.0 {
                    return Vec::new();
                }
                OrderRequest::market(OrderSide::Buy, quantity)
                    .map(|o| vec![o])
                    .unwrap_or_default()
            }
            Some(false) => {
                let held = portfolio.quantity(symbol);
                if held <= 0.0 {
                    return Vec::new();
                }
                OrderRequest::market(OrderSide::Sell, held)
                    .map(|o| vec![o])
                    .unwrap_or_default()
            }
            _ => Vec::new(),
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
                low: (close - 1.0).max(0.0),
                close,
                volume: 1_000.0,
            })
            .collect()
    }

    #[test]
    fn no_signal_during_warmup() {
        let mut strategy = MaCrossover::new(2, 3);
        let portfolio = Portfolio::new(10_000.0);
        let data = bars(&[100.0, 100.0, 100.0]);
        for i in 0..data.len() {
            assert!(strategy.on_bar(&data, i, &portfolio).is_empty());
        }
    }

    #[test]
    fn bullish_cross_emits_buy() {
        let mut strategy = MaCrossover::new(2, 3);
        let portfolio = Portfolio::new(10_000.0);
        // Flat then rising: short SMA overtakes long SMA on the last bar.
        let data = bars(&[100.0, 100.0, 100.0, 100.0, 108.0]);
        let orders = strategy.on_bar(&data, 4, &portfolio);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].side, OrderSide::Buy);
    }

    #[test]
    fn bearish_cross_sells_entire_position() {
        let mut strategy = MaCrossover::new(2, 3);
        let mut portfolio = Portfolio::new(0.0);
        portfolio.apply_fill(
            "SPY",
            OrderSide::Buy,
            &crate::domain::FillOutcome::filled(100.0, 50.0, 0.0),
        );
        // Rising then falling: bearish cross on the last bar.
        let data = bars(&[100.0, 108.0, 108.0, 108.0, 96.0]);
        let orders = strategy.on_bar(&data, 4, &portfolio);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].side, OrderSide::Sell);
        assert_eq!(orders[0].quantity, 50.0);
    }

    #[test]
    #[should_panic(expected = "long_period must be > short_period")]
    fn rejects_inverted_periods() {
        MaCrossover::new(5, 3);
    }
}
