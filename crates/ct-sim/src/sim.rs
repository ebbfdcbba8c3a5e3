//! The `Sim` struct and its tick loop.

use ct_agent::AgentView;
use ct_core::{EpidemicConfig, SimClock, SimRng, Tick};
use tracing::debug;

use crate::{History, Population, SimError, SimObserver, SimResult};

/// The simulation clock and everything it drives.
///
/// `Sim` owns the population, the prevalence history, and the single random
/// source; external code reads them through the query methods and advances
/// the model only through [`step`](Self::step) or the run loops.  Steps are
/// never re-entered: every mutating method takes `&mut self`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub(crate) config:            EpidemicConfig,
    pub(crate) clock:             SimClock,
    pub(crate) population:        Population,
    pub(crate) history:           History,
    pub(crate) rng:               SimRng,
    pub(crate) snapshot_interval: u64,
}

impl Sim {
    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &EpidemicConfig {
        &self.config
    }

    /// Ticks completed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Infected count recorded at the start of each completed tick.
    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Agents currently infected.
    #[inline]
    pub fn infected(&self) -> usize {
        self.population.infected()
    }

    /// Current infected share of the population (0 for an empty population).
    pub fn infected_ratio(&self) -> f64 {
        if self.population.is_empty() {
            return 0.0;
        }
        self.population.infected() as f64 / self.population.len() as f64
    }

    /// Position and health of every agent, for drawing.
    pub fn agent_views(&self) -> impl Iterator<Item = AgentView> + '_ {
        self.population.agent_views()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one tick: commit the grid, record prevalence, update every
    /// agent, advance the clock.  Returns the tick that was just completed.
    pub fn step(&mut self) -> Tick {
        let now = self.clock.current_tick;
        self.population.commit();
        let recorded = self.population.infected();
        self.history.push(recorded);
        self.population.update_all(&mut self.rng);
        self.clock.advance();
        debug!(tick = now.0, recorded, infected = self.population.infected(), "tick complete");
        now
    }

    /// [`step`](Self::step) with observer callbacks around it.
    pub fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> Tick {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        self.step();
        let recorded = self.history.latest().unwrap_or_default();
        observer.on_tick_end(now, recorded);
        if self.snapshot_interval > 0 && now.0.is_multiple_of(self.snapshot_interval) {
            observer.on_snapshot(now, &self.population);
        }
        now
    }

    /// Run exactly `n` ticks.  Does not call `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step_observed(observer);
        }
    }

    /// Step until `done` returns true (checked before every tick) or
    /// `max_ticks` ticks have run.  Calls `on_sim_end` and returns the
    /// number of ticks run.
    pub fn run_until<F, O>(&mut self, mut done: F, max_ticks: Option<u64>, observer: &mut O) -> u64
    where
        F: FnMut(&Sim) -> bool,
        O: SimObserver,
    {
        let mut ran = 0;
        while !done(self) && max_ticks.is_none_or(|max| ran < max) {
            self.step_observed(observer);
            ran += 1;
        }
        self.finish(observer);
        ran
    }

    /// Automatic mode: step while more than `floor_fraction` of the
    /// population is infected.
    pub fn run_while_prevalent<O: SimObserver>(
        &mut self,
        floor_fraction: f64,
        max_ticks:      Option<u64>,
        observer:       &mut O,
    ) -> u64 {
        let floor = floor_fraction * self.population.len() as f64;
        self.run_until(|sim| sim.infected() as f64 <= floor, max_ticks, observer)
    }

    /// Signal the end of a run to `observer`.
    pub fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Check the population invariants; see [`Population::verify`].
    pub fn verify(&self) -> SimResult<()> {
        self.population
            .verify()
            .map_err(|detail| SimError::Invariant { tick: self.tick(), detail })
    }
}
