//! Plain data row types written by output backends.

use ct_agent::{AgentView, HealthState};

/// Prevalence for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryRow {
    pub tick:           u64,
    pub infected:       u64,
    /// `infected / population`; 0 for an empty population.
    pub infected_ratio: f64,
}

impl HistoryRow {
    pub fn new(tick: u64, infected: usize, population: usize) -> Self {
        let infected_ratio = if population == 0 {
            0.0
        } else {
            infected as f64 / population as f64
        };
        Self { tick, infected: infected as u64, infected_ratio }
    }
}

/// One agent's position and health at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        i32,
    pub y:        i32,
    pub health:   HealthState,
}

impl AgentSnapshotRow {
    pub fn from_view(tick: u64, view: &AgentView) -> Self {
        Self {
            agent_id: view.id.0,
            tick,
            x:        view.position.x,
            y:        view.position.y,
            health:   view.health,
        }
    }
}
