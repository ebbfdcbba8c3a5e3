//! Epidemic model configuration.
//!
//! Fixed at construction; there is no runtime reconfiguration.  Typically
//! loaded from a TOML file by the application crate (with the `serde`
//! feature) and passed to `SimBuilder`.

use crate::{CoreError, CoreResult};

/// All tunable parameters of one simulation run.
///
/// `Default` reproduces the reference scenario: 6 000 agents on a 200 × 200
/// grid, 4 % initially infected, 20 % fast.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EpidemicConfig {
    /// Side length N of the square grid.
    pub grid_size: usize,

    /// Number of agents.  Must not exceed `grid_size²`.
    pub population: usize,

    /// Probability that an agent starts Infected.
    pub initial_infected_fraction: f64,

    /// Base per-exposure infection probability.
    pub infection_probability: f64,

    /// Factor applied to `infection_probability` while prevalence is at or
    /// below the threshold.
    pub infection_multiplier: f64,

    /// Threshold as a fraction of `population`.  Above it, the base rate is
    /// used.
    pub infection_threshold_fraction: f64,

    /// Countdown assigned on infection, in inner updates.
    pub sickness_length: u32,

    /// Probability that an agent is created fast.
    pub fast_fraction: f64,

    /// Inner updates per tick for a fast agent.  Normal agents always run one.
    pub fast_speed_multiplier: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for EpidemicConfig {
    fn default() -> Self {
        Self {
            grid_size:                    200,
            population:                   6_000,
            initial_infected_fraction:    0.04,
            infection_probability:        0.1,
            infection_multiplier:         5.0,
            infection_threshold_fraction: 0.2,
            sickness_length:              15,
            fast_fraction:                0.2,
            fast_speed_multiplier:        10,
            seed:                         42,
        }
    }
}

impl EpidemicConfig {
    /// Number of grid cells, N².
    #[inline]
    pub fn cell_count(&self) -> CoreResult<usize> {
        grid_cells(self.grid_size)
    }

    /// Absolute infected-count threshold T.
    #[inline]
    pub fn infection_threshold(&self) -> f64 {
        self.infection_threshold_fraction * self.population as f64
    }

    /// Check every parameter.  Population vs. grid capacity is checked here
    /// too so a bad config fails before any sampling happens.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid_size == 0 {
            return Err(CoreError::Config("grid_size must be positive".into()));
        }
        let cells = self.cell_count()?;
        if self.population > cells {
            return Err(CoreError::Config(format!(
                "population {} exceeds grid capacity {cells}",
                self.population
            )));
        }
        for (name, value) in [
            ("initial_infected_fraction", self.initial_infected_fraction),
            ("infection_probability", self.infection_probability),
            ("infection_threshold_fraction", self.infection_threshold_fraction),
            ("fast_fraction", self.fast_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CoreError::Config(format!("{name} must lie in [0, 1], got {value}")));
            }
        }
        if !self.infection_multiplier.is_finite() || self.infection_multiplier < 0.0 {
            return Err(CoreError::Config(format!(
                "infection_multiplier must be finite and non-negative, got {}",
                self.infection_multiplier
            )));
        }
        if self.sickness_length == 0 {
            return Err(CoreError::Config("sickness_length must be positive".into()));
        }
        if self.fast_speed_multiplier == 0 {
            return Err(CoreError::Config("fast_speed_multiplier must be positive".into()));
        }
        Ok(())
    }
}

/// Cell count of a `size × size` grid.
///
/// Coordinates are `i32`, so a side longer than `i32::MAX` is refused, as is
/// a cell count that overflows `usize`.
pub fn grid_cells(size: usize) -> CoreResult<usize> {
    if size > i32::MAX as usize {
        return Err(CoreError::Config(format!("grid_size {size} exceeds {}", i32::MAX)));
    }
    size.checked_mul(size)
        .ok_or_else(|| CoreError::Config(format!("grid_size {size} squared overflows usize")))
}
