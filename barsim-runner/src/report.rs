//! Report artifacts: JSON summary and equity-curve CSV.

use anyhow::{Context, Result};
use barsim_core::ledger::EquitySnapshot;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::runner::BacktestReport;

/// Write the full report as pretty-printed JSON.
pub fn write_report_json(path: &Path, report: &BacktestReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report {}", path.display()))?;
    Ok(())
}

/// Write the equity curve as `timestamp_ns,equity` CSV.
pub fn write_equity_csv(path: &Path, equity: &[EquitySnapshot]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("failed to create equity CSV {}", path.display()))?;
    writeln!(file, "timestamp_ns,equity")?;
    for point in equity {
        writeln!(file, "{},{:.4}", point.timestamp_ns, point.equity)?;
    }
    Ok(())
}
