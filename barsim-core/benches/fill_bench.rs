//! Criterion benchmarks for BarSim hot paths.
//!
//! Benchmarks:
//! 1. Fill simulation (market and limit, per-order cost)
//! 2. Equity ledger record + peak/drawdown query
//! 3. Full buy-and-hold replay over a synthetic series

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;

use barsim_core::domain::{Bar, OrderSide};
use barsim_core::engine::{run_replay, ReplayConfig};
use barsim_core::execution::FillSimulator;
use barsim_core::ledger::{EquityLedger, MarkedPosition};
use barsim_core::strategy::BuyAndHold;

// ── Helpers ──────────────────────────────────────────────────────────

fn make_bars(n: usize) -> Vec<Bar> {
    let start = chrono::DateTime::from_timestamp(1_577_923_200, 0).unwrap();
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Bar {
                symbol: "SPY".into(),
                timestamp: start + chrono::Duration::days(i as i64),
                open: close - 0.3,
                high: close + 1.5,
                low: close - 1.5,
                close,
                volume: 1_000_000.0,
            }
        })
        .collect()
}

// ── 1. Fill simulation ───────────────────────────────────────────────

fn bench_fill_simulation(c: &mut Criterion) {
    let sim = FillSimulator::new(0.001, 5.0);
    let bars = make_bars(1);
    let bar = &bars[0];

    c.bench_function("fill_sim/market_buy", |b| {
        b.iter(|| sim.simulate_market_order(black_box(OrderSide::Buy), black_box(100.0), bar))
    });

    c.bench_function("fill_sim/limit_sell", |b| {
        b.iter(|| {
            sim.simulate_limit_order(
                black_box(OrderSide::Sell),
                black_box(100.0),
                black_box(101.0),
                bar,
            )
        })
    });
}

// ── 2. Ledger record + query ─────────────────────────────────────────

fn bench_ledger(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger");
    for n in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("record_and_drawdown", n), &n, |b, &n| {
            b.iter(|| {
                let mut ledger = EquityLedger::new(100_000.0);
                let mut positions = HashMap::new();
                positions.insert("SPY".to_string(), MarkedPosition::new(100.0, 100.0));
                for i in 0..n {
                    let drifted = 100.0 + (i as f64 * 0.01).sin();
                    positions.insert("SPY".to_string(), MarkedPosition::new(100.0, drifted));
                    ledger.record(i as i64, 90_000.0, &positions);
                }
                black_box(ledger.current_drawdown())
            })
        });
    }
    group.finish();
}

// ── 3. Full replay ───────────────────────────────────────────────────

fn bench_replay(c: &mut Criterion) {
    let bars = make_bars(2_520); // ~10 years of dailies
    let config = ReplayConfig {
        initial_capital: 100_000.0,
        commission_rate: 0.001,
        slippage_bps: 5.0,
    };

    c.bench_function("replay/buy_and_hold_10y", |b| {
        b.iter(|| {
            let mut strategy = BuyAndHold::new();
            run_replay(&mut strategy, black_box(&bars), &config).unwrap()
        })
    });
}

criterion_group!(benches, bench_fill_simulation, bench_ledger, bench_replay);
criterion_main!(benches);
