//! Strategy trait — where order intents come from.
//!
//! Strategies see market data and the current portfolio, and answer with
//! zero or more order requests per bar. Dispatch is through a trait object,
//! with a required per-bar hook and optional lifecycle hooks.

pub mod buy_and_hold;
pub mod ma_crossover;

pub use buy_and_hold::BuyAndHold;
pub use ma_crossover::MaCrossover;

use crate::domain::{Bar, OrderRequest, Portfolio};

/// A backtestable strategy.
///
/// # Invariants
/// - `on_bar()` MUST be deterministic for the same bar sequence and
///   portfolio state
/// - `on_bar()` sees bars up to and including `index`; it must not peek at
///   later bars (the replay driver only ever hands it the prefix)
pub trait Strategy: Send {
    /// Strategy name for reports.
    fn name(&self) -> &str;

    /// Called once before the first bar.
    fn on_start(&mut self) {}

    /// Produce order intents for the bar at `index`. Required.
    fn on_bar(&mut self, bars: &[Bar], index: usize, portfolio: &Portfolio) -> Vec<OrderRequest>;

    /// Called once after the last bar.
    fn on_stop(&mut self) {}
}
