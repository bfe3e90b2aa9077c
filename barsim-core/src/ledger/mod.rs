//! Equity ledger — the authoritative time series of portfolio value.
//!
//! Append-only by construction: snapshots can be recorded but never removed
//! or amended, which keeps the curve audit-friendly. Peak and drawdown are
//! derived from the stored curve on each query rather than cached
//! incrementally; curves are in-memory vectors and queries happen at
//! end-of-run frequency.

use crate::domain::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One `(timestamp, equity)` point on the curve.
///
/// Timestamps are caller-supplied epoch nanoseconds, monotonically
/// non-decreasing by convention; the ledger does not enforce ordering but
/// peak/drawdown semantics assume it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquitySnapshot {
    pub timestamp_ns: i64,
    pub equity: f64,
}

/// A position as the ledger sees it: quantity held and current mark price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkedPosition {
    pub quantity: f64,
    pub mark_price: f64,
}

impl MarkedPosition {
    pub fn new(quantity: f64, mark_price: f64) -> Self {
        Self {
            quantity,
            mark_price,
        }
    }
}

/// Append-only equity curve with peak and drawdown queries.
///
/// Two observable states: *empty* (queries return initial-capital defaults)
/// and *populated* (queries are functions of the recorded sequence). The
/// transition is one-way, on the first `record` call.
///
/// Single-writer discipline: each replay owns its ledger exclusively.
#[derive(Debug, Clone)]
pub struct EquityLedger {
    initial_capital: f64,
    curve: Vec<EquitySnapshot>,
}

impl EquityLedger {
    pub fn new(initial_capital: f64) -> Self {
        Self {
            initial_capital,
            curve: Vec::new(),
        }
    }

    pub fn initial_capital(&self) -> f64 {
        self.initial_capital
    }

    /// Record one snapshot: `equity = cash + Σ(quantity × mark price)`.
    ///
    /// `positions` is keyed uniquely by symbol, so no position can be
    /// counted twice; flat positions contribute zero and may be omitted.
    /// The only observable effect is curve growth by exactly one element.
    pub fn record(
        &mut self,
        timestamp_ns: i64,
        cash: f64,
        positions: &HashMap<Symbol, MarkedPosition>,
    ) {
        let position_value: f64 = positions
            .values()
            .map(|p| p.quantity * p.mark_price)
            .sum();
        self.curve.push(EquitySnapshot {
            timestamp_ns,
            equity: cash + position_value,
        });
    }

    /// Defensive copy of the curve: mutating the returned vector never
    /// affects the ledger.
    pub fn equity_curve(&self) -> Vec<EquitySnapshot> {
        self.curve.clone()
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.curve.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curve.is_empty()
    }

    /// Last recorded equity, or the initial capital before any snapshot.
    pub fn final_equity(&self) -> f64 {
        self.curve
            .last()
            .map_or(self.initial_capital, |snap| snap.equity)
    }

    /// Maximum equity ever observed, over the entire history with the
    /// initial capital as the floor. Monotonically non-decreasing as
    /// snapshots are recorded.
    pub fn peak_equity(&self) -> f64 {
        self.curve
            .iter()
            .map(|snap| snap.equity)
            .fold(self.initial_capital, f64::max)
    }

    /// Current drawdown as a percentage in `[0, 100]`:
    /// `(peak − current) / peak × 100`, clamped to the range.
    ///
    /// A zero peak yields zero drawdown — a defined degenerate case, not an
    /// error. Negative equity (a loss past the entire stake) caps at 100.
    /// Exactly zero whenever current equity equals the running peak.
    pub fn current_drawdown(&self) -> f64 {
        let peak = self.peak_equity();
        if peak == 0.0 {
            return 0.0;
        }
        let current = self.final_equity();
        ((peak - current) / peak * 100.0).clamp(0.0, 100.0)
    }
}
