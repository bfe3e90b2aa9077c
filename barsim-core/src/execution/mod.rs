//! Execution — turns order intents into realized fills.
//!
//! Key concepts:
//! - **Market orders**: always fill at the bar close, slipped adversely
//! - **Limit orders**: rest for one bar, fill at the limit price iff the
//!   bar's range touches it (inclusive bounds), with zero slippage
//! - **Commission**: fraction of the filled notional, never charged on a
//!   non-fill

pub mod fill_sim;

pub use fill_sim::FillSimulator;
