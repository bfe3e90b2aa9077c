//! Bar-by-bar replay loop.
//!
//! Per bar, in order:
//! 1. Strategy produces order intents for the bar
//! 2. Fill simulation decides whether/at what price/with what cost each fills
//! 3. Portfolio accounting applies the fills
//! 4. Positions are marked at the bar close and the ledger records a snapshot
//!
//! The fill simulator and the ledger never see each other; this loop is the
//! only place they compose. Strictly sequential, no I/O, no suspension.

use crate::domain::{Bar, BarError, FillOutcome, OrderSide, Portfolio, Symbol};
use crate::execution::FillSimulator;
use crate::ledger::{EquityLedger, MarkedPosition};
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Replay parameters, fixed for the whole run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReplayConfig {
    pub initial_capital: f64,
    /// Commission as a fraction of notional.
    pub commission_rate: f64,
    /// Slippage in basis points, market orders only.
    pub slippage_bps: f64,
}

/// One executed fill, annotated with where in the replay it happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutedFill {
    pub bar_index: usize,
    pub timestamp_ns: i64,
    pub symbol: Symbol,
    pub side: OrderSide,
    pub outcome: FillOutcome,
}

/// Outcome of a full replay: the equity ledger plus the fill log.
#[derive(Debug)]
pub struct ReplayResult {
    pub ledger: EquityLedger,
    pub fills: Vec<ExecutedFill>,
    pub bar_count: usize,
    pub final_portfolio: Portfolio,
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("bar {index}: {source}")]
    InvalidBar {
        index: usize,
        #[source]
        source: BarError,
    },
    #[error("initial capital must be finite (got {0})")]
    InvalidCapital(f64),
}

/// Run one deterministic replay of `strategy` over `bars`.
///
/// All bars are validated before any state mutates, so a malformed feed is
/// rejected atomically at the call that received it. Sell intents for
/// symbols with nothing held are skipped rather than opening shorts.
pub fn run_replay(
    strategy: &mut dyn Strategy,
    bars: &[Bar],
    config: &ReplayConfig,
) -> Result<ReplayResult, ReplayError> {
    if !config.initial_capital.is_finite() {
        return Err(ReplayError::InvalidCapital(config.initial_capital));
    }
    for (index, bar) in bars.iter().enumerate() {
        bar.validate()
            .map_err(|source| ReplayError::InvalidBar { index, source })?;
    }

    let simulator = FillSimulator::new(config.commission_rate, config.slippage_bps);
    let mut portfolio = Portfolio::new(config.initial_capital);
    let mut ledger = EquityLedger::new(config.initial_capital);
    let mut fills = Vec::new();

    strategy.on_start();

    for (index, bar) in bars.iter().enumerate() {
        let orders = strategy.on_bar(bars, index, &portfolio);

        for order in orders {
            // No shorting: a sell can only close what is held.
            if order.side == OrderSide::Sell && portfolio.quantity(&bar.symbol) < order.quantity {
                continue;
            }
            let outcome = simulator.simulate(&order, bar);
            if outcome.filled {
                portfolio.apply_fill(&bar.symbol, order.side, &outcome);
                fills.push(ExecutedFill {
                    bar_index: index,
                    timestamp_ns: bar.epoch_ns(),
                    symbol: bar.symbol.clone(),
                    side: order.side,
                    outcome,
                });
            }
        }

        // Mark every open position at this bar's close.
        let marks: HashMap<Symbol, MarkedPosition> = portfolio
            .positions
            .iter()
            .map(|(sym, pos)| {
                let mark_price = if sym == &bar.symbol {
                    bar.close
                } else {
                    pos.avg_entry_price
                };
                (sym.clone(), MarkedPosition::new(pos.quantity, mark_price))
            })
            .collect();
        ledger.record(bar.epoch_ns(), portfolio.cash, &marks);
    }

    strategy.on_stop();

    Ok(ReplayResult {
        ledger,
        fills,
        bar_count: bars.len(),
        final_portfolio: portfolio,
    })
}
