//! Fluent builder for constructing a [`Sim`].

use ct_agent::{AgentSpec, AgentStoreBuilder};
use ct_core::{EpidemicConfig, SimClock, SimRng};
use ct_grid::OccupancyGrid;
use tracing::info;

use crate::{History, Population, Sim, SimResult, TransmissionRule};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                  |
/// |--------------------------|------------------------------------------|
/// | `.agents(v)`             | random population sampled from the config |
/// | `.snapshot_interval(n)`  | 0 (no `on_snapshot` calls)               |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .snapshot_interval(10)
///     .build()?;
/// sim.run_while_prevalent(0.01, None, &mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:            EpidemicConfig,
    agents:            Option<Vec<AgentSpec>>,
    snapshot_interval: u64,
}

impl SimBuilder {
    pub fn new(config: EpidemicConfig) -> Self {
        Self { config, agents: None, snapshot_interval: 0 }
    }

    /// Use exactly these agents instead of sampling a population.
    ///
    /// `config.population` is replaced by `specs.len()` so the infection
    /// threshold follows the real head count.
    pub fn agents(mut self, specs: Vec<AgentSpec>) -> Self {
        self.agents = Some(specs);
        self
    }

    /// Call `on_snapshot` every `n` ticks (0 disables snapshots).
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate the configuration, place the agents, and return a ready
    /// [`Sim`] at tick 0.
    ///
    /// Fails if the population does not fit the grid or any parameter is out
    /// of range.
    pub fn build(self) -> SimResult<Sim> {
        let mut config = self.config;
        if let Some(specs) = &self.agents {
            config.population = specs.len();
        }
        config.validate()?;

        let mut rng = SimRng::new(config.seed);
        let store = match self.agents {
            Some(specs) => AgentStoreBuilder::explicit(config.grid_size, config.sickness_length, specs),
            None => AgentStoreBuilder::from_config(&config),
        }
        .build(&mut rng)?;

        let grid = OccupancyGrid::from_positions(config.grid_size, &store.position)?;
        let fast = store.count_fast();
        let population = Population::new(
            store,
            grid,
            TransmissionRule::from_config(&config),
            config.sickness_length,
            config.fast_speed_multiplier,
        );

        info!(
            grid_size = config.grid_size,
            population = population.len(),
            infected = population.infected(),
            fast,
            seed = config.seed,
            "simulation ready"
        );

        Ok(Sim {
            config,
            clock: SimClock::new(),
            population,
            history: History::new(),
            rng,
            snapshot_interval: self.snapshot_interval,
        })
    }
}
