//! BarSim CLI — run backtests from TOML config files.
//!
//! Commands:
//! - `run` — execute a backtest from a TOML config and write report artifacts
//! - `sample-config` — emit a starter configuration

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use barsim_runner::config::{sample_config_toml, BacktestConfig};
use barsim_runner::report::{write_equity_csv, write_report_json};
use barsim_runner::runner::{run_backtest, BacktestReport};

#[derive(Parser)]
#[command(name = "barsim", about = "BarSim — deterministic bar-replay backtester")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a backtest from a TOML config file.
    Run {
        /// Path to a TOML config file.
        #[arg(long)]
        config: PathBuf,

        /// Output directory for report artifacts.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Skip writing artifacts; print the summary only.
        #[arg(long, default_value_t = false)]
        no_artifacts: bool,
    },
    /// Print a starter configuration to stdout or a file.
    SampleConfig {
        /// Write to this path instead of stdout.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            config,
            output_dir,
            no_artifacts,
        } => cmd_run(&config, &output_dir, no_artifacts),
        Commands::SampleConfig { path } => cmd_sample_config(path.as_deref()),
    }
}

fn cmd_run(config_path: &std::path::Path, output_dir: &std::path::Path, no_artifacts: bool) -> Result<()> {
    let config = BacktestConfig::from_path(config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    let report = run_backtest(&config).context("backtest failed")?;

    print_summary(&report);

    if !no_artifacts {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("creating {}", output_dir.display()))?;
        let json_path = output_dir.join(format!("{}_{}.json", report.symbol, report.strategy));
        let csv_path = output_dir.join(format!("{}_{}_equity.csv", report.symbol, report.strategy));
        write_report_json(&json_path, &report)?;
        write_equity_csv(&csv_path, &report.equity_curve)?;
        println!("\nArtifacts written:");
        println!("  {}", json_path.display());
        println!("  {}", csv_path.display());
    }
    Ok(())
}

fn cmd_sample_config(path: Option<&std::path::Path>) -> Result<()> {
    let toml = sample_config_toml();
    match path {
        Some(path) => {
            std::fs::write(path, &toml)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Sample config written to {}", path.display());
        }
        None => print!("{toml}"),
    }
    Ok(())
}

fn print_summary(report: &BacktestReport) {
    println!("Backtest: {} / {}", report.symbol, report.strategy);
    println!("  Bars:             {}", report.bar_count);
    println!("  Fills:            {}", report.fill_count);
    println!("  Initial capital:  {:>14.2}", report.initial_capital);
    println!("  Final equity:     {:>14.2}", report.final_equity);
    println!("  Peak equity:      {:>14.2}", report.peak_equity);
    println!("  Drawdown:         {:>13.2}%", report.current_drawdown_pct);
    println!("  Total return:     {:>13.2}%", report.metrics.total_return * 100.0);
    println!("  CAGR:             {:>13.2}%", report.metrics.cagr * 100.0);
    println!("  Sharpe:           {:>14.2}", report.metrics.sharpe);
    println!("  Max drawdown:     {:>13.2}%", report.metrics.max_drawdown * 100.0);
    println!("  Commission paid:  {:>14.2}", report.total_commission);
}
