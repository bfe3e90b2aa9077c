//! Bar — the fundamental market data unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OHLCV bar for a single symbol at a single replay step.
///
/// Bars are produced once per step by the data feed and never mutated.
/// The fill simulator trusts bar geometry; validation happens at the feed
/// boundary via [`Bar::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// A malformed bar, with the offending field and value.
#[derive(Debug, Error)]
pub enum BarError {
    #[error("bar {symbol}@{timestamp}: field '{field}' is not a finite non-negative number (got {value})")]
    NonFinite {
        symbol: String,
        timestamp: DateTime<Utc>,
        field: &'static str,
        value: f64,
    },
    #[error("bar {symbol}@{timestamp}: low {low} > high {high}")]
    LowAboveHigh {
        symbol: String,
        timestamp: DateTime<Utc>,
        low: f64,
        high: f64,
    },
    #[error("bar {symbol}@{timestamp}: field '{field}' ({value}) outside [low={low}, high={high}]")]
    OutsideRange {
        symbol: String,
        timestamp: DateTime<Utc>,
        field: &'static str,
        value: f64,
        low: f64,
        high: f64,
    },
}

impl Bar {
    /// Epoch-nanosecond timestamp, as recorded on ledger snapshots.
    ///
    /// Saturates at `i64::MAX` for dates beyond 2262, far outside any
    /// replayable history.
    pub fn epoch_ns(&self) -> i64 {
        self.timestamp.timestamp_nanos_opt().unwrap_or(i64::MAX)
    }

    /// Boundary validation: all fields finite and non-negative,
    /// `low <= open,close <= high`.
    pub fn validate(&self) -> Result<(), BarError> {
        for (field, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BarError::NonFinite {
                    symbol: self.symbol.clone(),
                    timestamp: self.timestamp,
                    field,
                    value,
                });
            }
        }
        if self.low > self.high {
            return Err(BarError::LowAboveHigh {
                symbol: self.symbol.clone(),
                timestamp: self.timestamp,
                low: self.low,
                high: self.high,
            });
        }
        for (field, value) in [("open", self.open), ("close", self.close)] {
            if value < self.low || value > self.high {
                return Err(BarError::OutsideRange {
                    symbol: self.symbol.clone(),
                    timestamp: self.timestamp,
                    field,
                    value,
                    low: self.low,
                    high: self.high,
                });
            }
        }
        Ok(())
    }

    /// Convenience check mirroring `validate()`.
    pub fn is_sane(&self) -> bool {
        self.validate().is_ok()
    }
}
