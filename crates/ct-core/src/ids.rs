//! Strongly typed agent identifier.
//!
//! An `AgentId` is the stable index of an agent in the population arena.  It
//! is `Copy + Ord + Hash` so it can key maps and sort without ceremony.  The
//! occupancy grid stores `Option<AgentId>` per cell, so there is no
//! "no agent" sentinel value.

use std::fmt;

/// Index of an agent in the population arena.  Max ~4.3 billion agents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
