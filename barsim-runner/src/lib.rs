//! BarSim Runner — backtest orchestration around the core engine.
//!
//! Takes a TOML configuration, loads or synthesizes bar data, runs the
//! replay, computes performance metrics from the resulting equity curve,
//! and exports report artifacts.

pub mod config;
pub mod data_loader;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod synthetic;

pub use config::{sample_config_toml, BacktestConfig, ConfigError, DataConfig, StrategyConfig};
pub use data_loader::{load_bars_csv, LoadError};
pub use metrics::PerformanceMetrics;
pub use report::{write_equity_csv, write_report_json};
pub use runner::{run_backtest, BacktestReport, RunError};
pub use synthetic::{generate_bars, SyntheticParams};
