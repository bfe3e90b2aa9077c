//! Serializable backtest configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config field '{field}' is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Serializable configuration for a single backtest run.
///
/// Captures everything needed to reproduce the run: backtest parameters,
/// the strategy, and the data source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BacktestConfig {
    pub backtest: BacktestParams,
    pub strategy: StrategyConfig,
    pub data: DataConfig,
}

/// Core numeric parameters of the run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BacktestParams {
    pub symbol: String,
    pub initial_capital: f64,
    /// Commission as a fraction of notional (0.001 = 0.1%).
    #[serde(default)]
    pub commission_rate: f64,
    /// Slippage in basis points, market orders only.
    #[serde(default)]
    pub slippage_bps: f64,
}

/// Strategy configuration (serializable enum).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyConfig {
    /// Buy on the first bar, hold to the end.
    BuyAndHold,

    /// Moving average crossover: short SMA crosses long SMA.
    MaCrossover { short_period: usize, long_period: usize },
}

/// Data source configuration (serializable enum).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataConfig {
    /// Load daily bars from a CSV file (`date,open,high,low,close,volume`).
    Csv { path: PathBuf },

    /// Deterministic synthetic bars (seeded drift + noise).
    Synthetic {
        bars: usize,
        seed: u64,
        start_price: f64,
        /// Per-bar drift (0.0005 ≈ 12% annual on dailies).
        drift: f64,
        /// Per-bar volatility (0.01 ≈ 16% annual on dailies).
        volatility: f64,
    },
}

impl BacktestConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.backtest.initial_capital.is_finite() || self.backtest.initial_capital <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "backtest.initial_capital",
                reason: format!("must be a positive number, got {}", self.backtest.initial_capital),
            });
        }
        if self.backtest.commission_rate < 0.0 {
            return Err(ConfigError::Invalid {
                field: "backtest.commission_rate",
                reason: format!("must be >= 0, got {}", self.backtest.commission_rate),
            });
        }
        if self.backtest.slippage_bps < 0.0 {
            return Err(ConfigError::Invalid {
                field: "backtest.slippage_bps",
                reason: format!("must be >= 0, got {}", self.backtest.slippage_bps),
            });
        }
        if let StrategyConfig::MaCrossover {
            short_period,
            long_period,
        } = &self.strategy
        {
            if *short_period == 0 || short_period >= long_period {
                return Err(ConfigError::Invalid {
                    field: "strategy",
                    reason: format!(
                        "MA crossover needs 0 < short_period < long_period, got {short_period}/{long_period}"
                    ),
                });
            }
        }
        if let DataConfig::Synthetic {
            bars, start_price, ..
        } = &self.data
        {
            if *bars == 0 {
                return Err(ConfigError::Invalid {
                    field: "data.bars",
                    reason: "must be > 0".into(),
                });
            }
            if !(*start_price > 0.0) {
                return Err(ConfigError::Invalid {
                    field: "data.start_price",
                    reason: format!("must be > 0, got {start_price}"),
                });
            }
        }
        Ok(())
    }
}

/// A starter configuration: synthetic data, MA crossover, modest frictions.
pub fn sample_config_toml() -> String {
    let sample = BacktestConfig {
        backtest: BacktestParams {
            symbol: "SPY".into(),
            initial_capital: 100_000.0,
            commission_rate: 0.001,
            slippage_bps: 5.0,
        },
        strategy: StrategyConfig::MaCrossover {
            short_period: 20,
            long_period: 50,
        },
        data: DataConfig::Synthetic {
            bars: 504,
            seed: 42,
            start_price: 100.0,
            drift: 0.0005,
            volatility: 0.012,
        },
    };
    toml::to_string_pretty(&sample).expect("sample config serializes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_round_trips() {
        let raw = sample_config_toml();
        let config = BacktestConfig::from_toml_str(&raw).unwrap();
        assert_eq!(config.backtest.symbol, "SPY");
        assert_eq!(
            config.strategy,
            StrategyConfig::MaCrossover {
                short_period: 20,
                long_period: 50
            }
        );
    }

    #[test]
    fn parses_csv_data_source() {
        let raw = r#"
            [backtest]
            symbol = "SPY"
            initial_capital = 10000.0

            [strategy]
            type = "BUY_AND_HOLD"

            [data]
            type = "CSV"
            path = "bars.csv"
        "#;
        let config = BacktestConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.backtest.commission_rate, 0.0);
        assert!(matches!(config.data, DataConfig::Csv { .. }));
    }

    #[test]
    fn rejects_non_positive_capital() {
        let raw = r#"
            [backtest]
            symbol = "SPY"
            initial_capital = 0.0

            [strategy]
            type = "BUY_AND_HOLD"

            [data]
            type = "CSV"
            path = "bars.csv"
        "#;
        let err = BacktestConfig::from_toml_str(raw).unwrap_err();
        assert!(err.to_string().contains("initial_capital"));
    }

    #[test]
    fn rejects_inverted_ma_periods() {
        let raw = r#"
            [backtest]
            symbol = "SPY"
            initial_capital = 10000.0

            [strategy]
            type = "MA_CROSSOVER"
            short_period = 50
            long_period = 20

            [data]
            type = "CSV"
            path = "bars.csv"
        "#;
        assert!(BacktestConfig::from_toml_str(raw).is_err());
    }
}
