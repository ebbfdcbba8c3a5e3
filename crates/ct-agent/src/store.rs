//! Core agent storage: `AgentStore` (SoA data) and `AgentView` (read-only
//! per-agent snapshot for renderers).

use ct_core::{AgentId, GridPoint};

use crate::{HealthState, SpeedClass};

/// A copy of one agent's state, for drawing and inspection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub id:       AgentId,
    pub position: GridPoint,
    pub speed:    SpeedClass,
    pub health:   HealthState,
}

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];
/// ```
///
/// Health fields are private so the only way to change them is through
/// [`infect`](Self::infect) and [`tick_sickness`](Self::tick_sickness),
/// which enforce the one-way progression.
#[derive(Clone, Debug)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current cell.  Written only by the movement step, which keeps it in
    /// sync with the occupancy grid's `next` buffer.
    pub position: Vec<GridPoint>,

    /// Speed class, fixed at creation.
    pub speed: Vec<SpeedClass>,

    health: Vec<HealthState>,

    /// Set on the first infection and never cleared.  Locks the agent out
    /// of the exposure check for the rest of the run.
    has_been_sick: Vec<bool>,

    /// Remaining inner updates of infectiousness.  Meaningful only while
    /// `Infected`; zero otherwise.
    sickness_countdown: Vec<u32>,
}

impl AgentStore {
    /// All agents susceptible, at the given positions and speeds.
    pub(crate) fn new(position: Vec<GridPoint>, speed: Vec<SpeedClass>) -> Self {
        let count = position.len();
        debug_assert_eq!(speed.len(), count);
        Self {
            count,
            position,
            speed,
            health: vec![HealthState::Susceptible; count],
            has_been_sick: vec![false; count],
            sickness_countdown: vec![0; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all valid `AgentId`s in creation order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn health(&self, agent: AgentId) -> HealthState {
        self.health[agent.index()]
    }

    /// Health of every agent, indexed by `AgentId`.
    #[inline]
    pub fn health_slice(&self) -> &[HealthState] {
        &self.health
    }

    #[inline]
    pub fn has_been_sick(&self, agent: AgentId) -> bool {
        self.has_been_sick[agent.index()]
    }

    #[inline]
    pub fn sickness_countdown(&self, agent: AgentId) -> u32 {
        self.sickness_countdown[agent.index()]
    }

    #[inline]
    pub fn is_infectious(&self, agent: AgentId) -> bool {
        self.health[agent.index()].is_infectious()
    }

    /// Snapshot of one agent.
    pub fn view(&self, agent: AgentId) -> AgentView {
        let i = agent.index();
        AgentView {
            id:       agent,
            position: self.position[i],
            speed:    self.speed[i],
            health:   self.health[i],
        }
    }

    /// Snapshots of every agent in creation order.
    pub fn views(&self) -> impl Iterator<Item = AgentView> + '_ {
        self.ids().map(|id| self.view(id))
    }

    /// Number of agents currently `Infected`.
    pub fn count_infected(&self) -> usize {
        self.health.iter().filter(|h| h.is_infectious()).count()
    }

    /// Number of agents flagged fast.
    pub fn count_fast(&self) -> usize {
        self.speed.iter().filter(|s| **s == SpeedClass::Fast).count()
    }

    // ── State machine ─────────────────────────────────────────────────────

    /// Susceptible → Infected with `sickness_length` updates to run.
    ///
    /// Returns `false` and changes nothing if the agent has ever been sick.
    pub fn infect(&mut self, agent: AgentId, sickness_length: u32) -> bool {
        let i = agent.index();
        if self.has_been_sick[i] {
            return false;
        }
        self.has_been_sick[i] = true;
        self.health[i] = HealthState::Infected;
        self.sickness_countdown[i] = sickness_length;
        true
    }

    /// One countdown step for an infected agent.  Returns `true` exactly once
    /// per agent: on the step where the countdown reaches zero and the agent
    /// becomes `Recovered`.  No-op for any other state.
    pub fn tick_sickness(&mut self, agent: AgentId) -> bool {
        let i = agent.index();
        if self.health[i] != HealthState::Infected {
            return false;
        }
        self.sickness_countdown[i] = self.sickness_countdown[i].saturating_sub(1);
        if self.sickness_countdown[i] == 0 {
            self.health[i] = HealthState::Recovered;
            return true;
        }
        false
    }
}
