//! Health and speed enums.

use std::fmt;

/// Where an agent is in the susceptible → infected → recovered progression.
///
/// Transitions only ever move rightwards; `Recovered` is terminal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    #[default]
    Susceptible,
    Infected,
    Recovered,
}

impl HealthState {
    /// Only infected agents transmit.
    #[inline]
    pub fn is_infectious(self) -> bool {
        self == HealthState::Infected
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Susceptible => "susceptible",
            HealthState::Infected    => "infected",
            HealthState::Recovered   => "recovered",
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Movement speed, fixed at creation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedClass {
    #[default]
    Normal,
    Fast,
}

impl SpeedClass {
    /// Inner updates per tick: 1 for normal agents, `fast_multiplier` for
    /// fast ones.
    #[inline]
    pub fn updates_per_tick(self, fast_multiplier: u32) -> u32 {
        match self {
            SpeedClass::Normal => 1,
            SpeedClass::Fast   => fast_multiplier,
        }
    }
}
