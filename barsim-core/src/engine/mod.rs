//! Replay engine — the deterministic single pass over historical bars.

pub mod replay;

pub use replay::{run_replay, ExecutedFill, ReplayConfig, ReplayError, ReplayResult};
