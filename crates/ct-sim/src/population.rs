//! The `Population`: agents, their grid, and the infected counter.

use ct_agent::{AgentStore, AgentView, HealthState};
use ct_core::{AgentId, SimRng};
use ct_grid::OccupancyGrid;
use tracing::trace;

use crate::TransmissionRule;

/// All mutable model state except the clock and the history.
///
/// The agent arena and the occupancy grid are only mutated through
/// [`update_all`](Self::update_all) (driven by [`Sim::step`][crate::Sim::step]),
/// which keeps `infected` equal to the number of `Infected` agents and every
/// agent's position equal to its cell in the grid's next buffer.
#[derive(Clone, Debug)]
pub struct Population {
    agents:          AgentStore,
    grid:            OccupancyGrid,
    infected:        usize,
    rule:            TransmissionRule,
    sickness_length: u32,
    fast_multiplier: u32,
}

impl Population {
    pub(crate) fn new(
        agents:          AgentStore,
        grid:            OccupancyGrid,
        rule:            TransmissionRule,
        sickness_length: u32,
        fast_multiplier: u32,
    ) -> Self {
        let infected = agents.count_infected();
        Self { agents, grid, infected, rule, sickness_length, fast_multiplier }
    }

    // ── Read-only queries ─────────────────────────────────────────────────

    #[inline]
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Number of agents currently `Infected`.
    #[inline]
    pub fn infected(&self) -> usize {
        self.infected
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn rule(&self) -> &TransmissionRule {
        &self.rule
    }

    /// Position and health of every agent, in creation order.
    pub fn agent_views(&self) -> impl Iterator<Item = AgentView> + '_ {
        self.agents.views()
    }

    /// Counts of (susceptible, infected, recovered) agents.
    pub fn health_counts(&self) -> (usize, usize, usize) {
        self.agents
            .health_slice()
            .iter()
            .fold((0, 0, 0), |(s, i, r), h| match h {
                HealthState::Susceptible => (s + 1, i, r),
                HealthState::Infected    => (s, i + 1, r),
                HealthState::Recovered   => (s, i, r + 1),
            })
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Promote the grid's next buffer to current.
    pub(crate) fn commit(&mut self) {
        self.grid.commit();
    }

    /// Update every agent once per its speed class, in creation order.
    pub(crate) fn update_all(&mut self, rng: &mut SimRng) {
        for i in 0..self.agents.count as u32 {
            self.update_agent(AgentId(i), rng);
        }
    }

    /// Run `agent`'s inner update as many times as its speed class asks.
    fn update_agent(&mut self, agent: AgentId, rng: &mut SimRng) {
        let repeats = self.agents.speed[agent.index()].updates_per_tick(self.fast_multiplier);
        for _ in 0..repeats {
            self.inner_update(agent, rng);
        }
    }

    /// Health step followed by a movement step.
    fn inner_update(&mut self, agent: AgentId, rng: &mut SimRng) {
        let i = agent.index();

        if !self.agents.has_been_sick(agent) {
            let agents = &self.agents;
            let exposed = self
                .grid
                .has_infected_neighbor(agents.position[i], |n| agents.is_infectious(n));
            if exposed {
                let p = self.rule.probability(self.infected);
                if rng.gen_bool(p) && self.agents.infect(agent, self.sickness_length) {
                    self.infected += 1;
                    trace!(%agent, p, infected = self.infected, "infection");
                }
            }
        } else if self.agents.tick_sickness(agent) {
            self.infected -= 1;
            trace!(%agent, infected = self.infected, "recovery");
        }

        let from = self.agents.position[i];
        let moves = self.grid.legal_movements(from);
        if let Some(&offset) = rng.choose(moves.as_slice()) {
            self.agents.position[i] = self.grid.move_agent(agent, from, offset);
        }
    }

    // ── Diagnostics ───────────────────────────────────────────────────────

    /// Check the structural invariants; `Err` carries a description of the
    /// first violation found.
    ///
    /// - every agent's position is in bounds and holds that agent in the
    ///   grid's next buffer, and no other cell is occupied;
    /// - the infected counter matches the arena;
    /// - `has_been_sick` is set exactly for non-susceptible agents;
    /// - infected agents have a positive countdown.
    pub fn verify(&self) -> Result<(), String> {
        for id in self.agents.ids() {
            let pos = self.agents.position[id.index()];
            if !pos.in_bounds(self.grid.size()) {
                return Err(format!("{id} is off the grid at {pos}"));
            }
            if self.grid.next(pos) != Some(id) {
                return Err(format!("{id} at {pos} but grid holds {:?}", self.grid.next(pos)));
            }
            let health = self.agents.health(id);
            if self.agents.has_been_sick(id) != (health != HealthState::Susceptible) {
                return Err(format!("{id} is {health} with has_been_sick out of sync"));
            }
            if health == HealthState::Infected && self.agents.sickness_countdown(id) == 0 {
                return Err(format!("{id} is infected with an expired countdown"));
            }
        }
        if self.grid.occupied_next_count() != self.agents.count {
            return Err(format!(
                "{} occupied cells for {} agents",
                self.grid.occupied_next_count(),
                self.agents.count
            ));
        }
        let actual = self.agents.count_infected();
        if actual != self.infected {
            return Err(format!("infected counter {} but {actual} agents infected", self.infected));
        }
        Ok(())
    }
}
