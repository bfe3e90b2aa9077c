//! Backtest runner — wires together config, data, engine, and metrics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use barsim_core::domain::Bar;
use barsim_core::engine::{run_replay, ReplayConfig, ReplayError};
use barsim_core::ledger::EquitySnapshot;
use barsim_core::strategy::{BuyAndHold, MaCrossover, Strategy};

use crate::config::{BacktestConfig, ConfigError, DataConfig, StrategyConfig};
use crate::data_loader::{load_bars_csv, LoadError};
use crate::metrics::PerformanceMetrics;
use crate::synthetic::{generate_bars, SyntheticParams};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("data error: {0}")]
    Data(#[from] LoadError),
    #[error("replay error: {0}")]
    Replay(#[from] ReplayError),
}

/// Complete result of a single backtest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestReport {
    pub symbol: String,
    pub strategy: String,
    pub initial_capital: f64,
    pub final_equity: f64,
    pub peak_equity: f64,
    /// Drawdown at the last bar, percent of peak.
    pub current_drawdown_pct: f64,
    pub metrics: PerformanceMetrics,
    pub equity_curve: Vec<EquitySnapshot>,
    pub fill_count: usize,
    pub bar_count: usize,
    pub total_commission: f64,
}

/// Run a single backtest from a configuration.
///
/// Loads (or synthesizes) the bar series, replays the strategy over it, and
/// derives metrics from the resulting equity curve.
pub fn run_backtest(config: &BacktestConfig) -> Result<BacktestReport, RunError> {
    let bars = load_data(config)?;
    let mut strategy = build_strategy(&config.strategy);

    let replay_config = ReplayConfig {
        initial_capital: config.backtest.initial_capital,
        commission_rate: config.backtest.commission_rate,
        slippage_bps: config.backtest.slippage_bps,
    };
    let result = run_replay(strategy.as_mut(), &bars, &replay_config)?;

    let equity_values: Vec<f64> = result
        .ledger
        .equity_curve()
        .iter()
        .map(|s| s.equity)
        .collect();

    Ok(BacktestReport {
        symbol: config.backtest.symbol.clone(),
        strategy: strategy.name().to_string(),
        initial_capital: config.backtest.initial_capital,
        final_equity: result.ledger.final_equity(),
        peak_equity: result.ledger.peak_equity(),
        current_drawdown_pct: result.ledger.current_drawdown(),
        metrics: PerformanceMetrics::compute(&equity_values),
        equity_curve: result.ledger.equity_curve(),
        fill_count: result.fills.len(),
        bar_count: result.bar_count,
        total_commission: result.final_portfolio.total_commission,
    })
}

fn load_data(config: &BacktestConfig) -> Result<Vec<Bar>, RunError> {
    match &config.data {
        DataConfig::Csv { path } => Ok(load_bars_csv(path, &config.backtest.symbol)?),
        DataConfig::Synthetic {
            bars,
            seed,
            start_price,
            drift,
            volatility,
        } => Ok(generate_bars(
            &config.backtest.symbol,
            &SyntheticParams {
                bars: *bars,
                seed: *seed,
                start_price: *start_price,
                drift: *drift,
                volatility: *volatility,
            },
        )),
    }
}

fn build_strategy(config: &StrategyConfig) -> Box<dyn Strategy> {
    match config {
        StrategyConfig::BuyAndHold => Box::new(BuyAndHold::new()),
        StrategyConfig::MaCrossover {
            short_period,
            long_period,
        } => Box::new(MaCrossover::new(*short_period, *long_period)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BacktestParams;

    fn synthetic_config() -> BacktestConfig {
        BacktestConfig {
            backtest: BacktestParams {
                symbol: "SPY".into(),
                initial_capital: 100_000.0,
                commission_rate: 0.001,
                slippage_bps: 5.0,
            },
            strategy: StrategyConfig::BuyAndHold,
            data: DataConfig::Synthetic {
                bars: 252,
                seed: 42,
                start_price: 100.0,
                drift: 0.0005,
                volatility: 0.012,
            },
        }
    }

    #[test]
    fn synthetic_buy_and_hold_runs() {
        let report = run_backtest(&synthetic_config()).unwrap();
        assert_eq!(report.bar_count, 252);
        assert_eq!(report.equity_curve.len(), 252);
        assert_eq!(report.fill_count, 1);
        assert!(report.total_commission > 0.0);
        assert!(report.peak_equity >= report.final_equity);
    }

    #[test]
    fn identical_configs_produce_identical_reports() {
        let a = run_backtest(&synthetic_config()).unwrap();
        let b = run_backtest(&synthetic_config()).unwrap();
        assert_eq!(a.final_equity, b.final_equity);
        assert_eq!(a.equity_curve, b.equity_curve);
        assert_eq!(a.fill_count, b.fill_count);
    }
}
