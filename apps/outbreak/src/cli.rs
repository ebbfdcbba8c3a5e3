//! Command-line interface and configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use ct_core::EpidemicConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Step until prevalence drops to the floor, then report.
    Automatic,
    /// Step on demand from stdin commands.
    Manual,
}

/// Spatial epidemic on a grid of wandering agents.
#[derive(Debug, Parser)]
#[command(name = "outbreak", version)]
pub struct Cli {
    /// TOML file with EpidemicConfig keys; defaults apply to missing keys and
    /// unknown keys are rejected.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured RNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = Mode::Automatic)]
    pub mode: Mode,

    /// Directory for history and snapshot CSV files.
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Automatic mode stops once infected / population falls to this value.
    #[arg(long, default_value_t = 0.01)]
    pub floor: f64,

    /// Hard cap on automatic-mode ticks.
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Write agent snapshots every N ticks in automatic mode (0 = never).
    #[arg(long, default_value_t = 0)]
    pub snapshot_interval: u64,
}

impl Cli {
    /// Config file (if any) with command-line overrides applied.
    pub fn epidemic_config(&self) -> Result<EpidemicConfig> {
        ensure!(
            (0.0..=1.0).contains(&self.floor),
            "--floor must lie in [0, 1], got {}",
            self.floor
        );
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => EpidemicConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

pub fn load_config(path: &Path) -> Result<EpidemicConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: EpidemicConfig =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}
