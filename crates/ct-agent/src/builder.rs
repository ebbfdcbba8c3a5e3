//! Builder for the initial population.
//!
//! # Usage
//!
//! ```rust
//! use ct_agent::AgentStoreBuilder;
//! use ct_core::{EpidemicConfig, SimRng};
//!
//! let config = EpidemicConfig { grid_size: 20, population: 100, ..Default::default() };
//! let mut rng = SimRng::new(config.seed);
//! let store = AgentStoreBuilder::from_config(&config).build(&mut rng).unwrap();
//!
//! assert_eq!(store.count, 100);
//! ```

use ct_core::{AgentId, EpidemicConfig, GridPoint, SimRng, grid_cells};

use crate::{AgentError, AgentResult, AgentStore, SpeedClass};

/// Hand-written initial state for one agent.  Used by tests and scripted
/// scenarios where positions must be exact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AgentSpec {
    pub position: GridPoint,
    pub speed:    SpeedClass,
    pub infected: bool,
}

impl AgentSpec {
    /// A normal-speed susceptible agent at `(x, y)`.
    pub fn susceptible(x: i32, y: i32) -> Self {
        Self { position: GridPoint::new(x, y), speed: SpeedClass::Normal, infected: false }
    }

    /// A normal-speed infected agent at `(x, y)`.
    pub fn infected(x: i32, y: i32) -> Self {
        Self { infected: true, ..Self::susceptible(x, y) }
    }

    pub fn fast(mut self) -> Self {
        self.speed = SpeedClass::Fast;
        self
    }
}

enum Source {
    Random {
        population:        usize,
        infected_fraction: f64,
        fast_fraction:     f64,
    },
    Explicit(Vec<AgentSpec>),
}

/// Builds an [`AgentStore`] either by random sampling from an
/// [`EpidemicConfig`] or from an explicit list of [`AgentSpec`]s.
pub struct AgentStoreBuilder {
    grid_size:       usize,
    sickness_length: u32,
    source:          Source,
}

impl AgentStoreBuilder {
    /// Random population as described by `config`.
    pub fn from_config(config: &EpidemicConfig) -> Self {
        Self {
            grid_size:       config.grid_size,
            sickness_length: config.sickness_length,
            source: Source::Random {
                population:        config.population,
                infected_fraction: config.initial_infected_fraction,
                fast_fraction:     config.fast_fraction,
            },
        }
    }

    /// Exactly the agents in `specs`, in order.  The builder does not check
    /// for duplicate positions; the occupancy grid rejects those on
    /// placement.
    pub fn explicit(grid_size: usize, sickness_length: u32, specs: Vec<AgentSpec>) -> Self {
        Self { grid_size, sickness_length, source: Source::Explicit(specs) }
    }

    /// Construct the store, drawing from `rng` for random populations.
    ///
    /// Random draw order: all positions first (distinct cells sampled without
    /// replacement), then per agent in creation order a speed roll followed
    /// by an infection roll.
    pub fn build(self, rng: &mut SimRng) -> AgentResult<AgentStore> {
        let cells = grid_cells(self.grid_size)?;
        match self.source {
            Source::Random { population, infected_fraction, fast_fraction } => {
                if population > cells {
                    return Err(AgentError::PopulationExceedsGrid { population, cells });
                }
                let positions: Vec<GridPoint> = rng
                    .sample_indices(cells, population)
                    .into_iter()
                    .map(|i| GridPoint::from_cell_index(i, self.grid_size))
                    .collect();

                let mut speeds = Vec::with_capacity(population);
                let mut infected = Vec::with_capacity(population);
                for _ in 0..population {
                    speeds.push(if rng.gen_bool(fast_fraction) {
                        SpeedClass::Fast
                    } else {
                        SpeedClass::Normal
                    });
                    infected.push(rng.gen_bool(infected_fraction));
                }

                let mut store = AgentStore::new(positions, speeds);
                for (id, sick) in (0..population as u32).zip(infected) {
                    if sick {
                        store.infect(AgentId(id), self.sickness_length);
                    }
                }
                Ok(store)
            }
            Source::Explicit(specs) => {
                if specs.len() > cells {
                    return Err(AgentError::PopulationExceedsGrid { population: specs.len(), cells });
                }
                for (index, spec) in specs.iter().enumerate() {
                    if !spec.position.in_bounds(self.grid_size) {
                        return Err(AgentError::OutOfBounds {
                            index,
                            point: spec.position,
                            size:  self.grid_size,
                        });
                    }
                }
                let mut store = AgentStore::new(
                    specs.iter().map(|s| s.position).collect(),
                    specs.iter().map(|s| s.speed).collect(),
                );
                for (id, spec) in (0..specs.len() as u32).zip(&specs) {
                    if spec.infected {
                        store.infect(AgentId(id), self.sickness_length);
                    }
                }
                Ok(store)
            }
        }
    }
}
