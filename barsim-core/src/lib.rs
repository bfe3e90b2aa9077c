//! BarSim Core — domain types, fill simulation, equity ledger, replay loop.
//!
//! This crate contains the numeric heart of the backtest engine:
//! - Domain value types (bars, order requests, fill outcomes, positions)
//! - `FillSimulator`: pure fill model with commission and slippage
//! - `EquityLedger`: append-only equity curve with peak/drawdown queries
//! - `Strategy` trait with optional lifecycle hooks
//! - Bar-by-bar replay driver wiring the pieces together
//!
//! The fill simulator and the ledger never call each other; the replay
//! driver composes them per bar.

pub mod domain;
pub mod engine;
pub mod execution;
pub mod ledger;
pub mod strategy;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: core types are Send + Sync.
    ///
    /// A future multi-run harness may share a `FillSimulator` read-only
    /// across threads; this breaks the build immediately if any type picks
    /// up a non-Send field.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Bar>();
        require_sync::<domain::Bar>();
        require_send::<domain::OrderRequest>();
        require_sync::<domain::OrderRequest>();
        require_send::<domain::FillOutcome>();
        require_sync::<domain::FillOutcome>();
        require_send::<domain::Position>();
        require_sync::<domain::Position>();
        require_send::<domain::Portfolio>();
        require_sync::<domain::Portfolio>();

        require_send::<execution::FillSimulator>();
        require_sync::<execution::FillSimulator>();

        require_send::<ledger::EquityLedger>();
        require_sync::<ledger::EquityLedger>();
        require_send::<ledger::EquitySnapshot>();
        require_sync::<ledger::EquitySnapshot>();

        require_send::<engine::ReplayConfig>();
        require_sync::<engine::ReplayConfig>();
        require_send::<engine::ReplayResult>();
        require_sync::<engine::ReplayResult>();
    }
}
