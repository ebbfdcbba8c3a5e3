//! outbreak — spatial epidemic on a grid of wandering agents.
//!
//! Automatic mode steps until the infected share drops to `--floor`, logging
//! `iteration N: infected/population` each tick and writing the history (and
//! optional agent snapshots) as CSV.  Manual mode reads step commands from
//! stdin; see [`manual`].
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` for per-tick detail
//! or `RUST_LOG=trace` for every infection and recovery.

mod cli;
mod manual;
mod report;

use std::io;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use ct_core::Tick;
use ct_output::{CsvWriter, SimOutputObserver};
use ct_sim::{SimBuilder, SimObserver};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Mode};

// ── Observer wrapper for progress lines ───────────────────────────────────────

struct ProgressObserver<O: SimObserver> {
    inner:      O,
    population: usize,
}

impl<O: SimObserver> SimObserver for ProgressObserver<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, infected: usize) {
        info!("iteration {}: {infected}/{}", tick.0, self.population);
        self.inner.on_tick_end(tick, infected);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &ct_sim::Population) {
        self.inner.on_snapshot(tick, population);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.epidemic_config()?;

    let mut sim = SimBuilder::new(config)
        .snapshot_interval(cli.snapshot_interval)
        .build()
        .context("building simulation")?;

    match cli.mode {
        Mode::Automatic => {
            let writer = CsvWriter::new(&cli.output)
                .with_context(|| format!("opening output in {}", cli.output.display()))?;
            let mut obs = ProgressObserver {
                inner:      SimOutputObserver::new(writer, sim.population().len()),
                population: sim.population().len(),
            };

            let t0 = Instant::now();
            let ran = sim.run_while_prevalent(cli.floor, cli.max_ticks, &mut obs);
            info!(ticks = ran, secs = t0.elapsed().as_secs_f64(), "run complete");

            if let Some(e) = obs.inner.take_error() {
                bail!("output error: {e}");
            }
            print!("{}", report::summary(&sim));
            info!(dir = %cli.output.display(), "history written");
        }
        Mode::Manual => {
            info!("manual mode: s [N] = step, g = history, i = info, q = quit");
            let stdin = io::stdin();
            manual::run(&mut sim, stdin.lock(), io::stdout(), &cli.output)?;
        }
    }
    Ok(())
}
