//! CSV bar ingest with boundary validation.
//!
//! The core engine trusts bar geometry; this loader is where malformed
//! feeds get rejected, row by row, with enough detail to fix the file.

use barsim_core::domain::{Bar, BarError};
use chrono::{NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors from loading a bar file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} row {row}: {source}")]
    Malformed {
        path: String,
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("{path} row {row}: bad date '{value}'")]
    BadDate {
        path: String,
        row: usize,
        value: String,
    },
    #[error("{path} row {row}: {source}")]
    InsaneBar {
        path: String,
        row: usize,
        #[source]
        source: BarError,
    },
    #[error("{path} row {row}: date {date} not after previous row")]
    OutOfOrder {
        path: String,
        row: usize,
        date: NaiveDate,
    },
    #[error("{path}: no data rows")]
    Empty { path: String },
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

/// Load daily bars from a CSV file with header
/// `date,open,high,low,close,volume` (date as `YYYY-MM-DD`).
///
/// Rejects malformed rows, insane bar geometry, and non-increasing dates.
pub fn load_bars_csv(path: &Path, symbol: &str) -> Result<Vec<Bar>, LoadError> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: display.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut bars = Vec::new();
    let mut prev_date: Option<NaiveDate> = None;

    for (i, record) in reader.deserialize::<CsvRow>().enumerate() {
        let row = i + 2; // header is row 1
        let record = record.map_err(|source| LoadError::Malformed {
            path: display.clone(),
            row,
            source,
        })?;

        let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").map_err(|_| {
            LoadError::BadDate {
                path: display.clone(),
                row,
                value: record.date.clone(),
            }
        })?;

        if let Some(prev) = prev_date {
            if date <= prev {
                return Err(LoadError::OutOfOrder {
                    path: display.clone(),
                    row,
                    date,
                });
            }
        }
        prev_date = Some(date);

        let bar = Bar {
            symbol: symbol.to_string(),
            timestamp: Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("midnight exists")),
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
            volume: record.volume,
        };
        bar.validate().map_err(|source| LoadError::InsaneBar {
            path: display.clone(),
            row,
            source,
        })?;
        bars.push(bar);
    }

    if bars.is_empty() {
        return Err(LoadError::Empty { path: display });
    }
    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn loads_well_formed_csv() {
        let file = write_csv(
            "date,open,high,low,close,volume\n\
             2024-01-02,100.0,102.0,99.0,101.0,1000000\n\
             2024-01-03,101.0,103.0,100.0,102.5,900000\n",
        );
        let bars = load_bars_csv(file.path(), "SPY").unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].symbol, "SPY");
        assert_eq!(bars[1].close, 102.5);
        assert!(bars[0].epoch_ns() < bars[1].epoch_ns());
    }

    #[test]
    fn rejects_insane_geometry_with_row_number() {
        let file = write_csv(
            "date,open,high,low,close,volume\n\
             2024-01-02,100.0,98.0,99.0,101.0,1000000\n",
        );
        let err = load_bars_csv(file.path(), "SPY").unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let file = write_csv(
            "date,open,high,low,close,volume\n\
             2024-01-03,100.0,102.0,99.0,101.0,1000000\n\
             2024-01-02,101.0,103.0,100.0,102.0,900000\n",
        );
        let err = load_bars_csv(file.path(), "SPY").unwrap_err();
        assert!(matches!(err, LoadError::OutOfOrder { row: 3, .. }));
    }

    #[test]
    fn rejects_bad_date() {
        let file = write_csv(
            "date,open,high,low,close,volume\n\
             01/02/2024,100.0,102.0,99.0,101.0,1000000\n",
        );
        assert!(matches!(
            load_bars_csv(file.path(), "SPY"),
            Err(LoadError::BadDate { .. })
        ));
    }

    #[test]
    fn rejects_empty_file() {
        let file = write_csv("date,open,high,low,close,volume\n");
        assert!(matches!(
            load_bars_csv(file.path(), "SPY"),
            Err(LoadError::Empty { .. })
        ));
    }
}
