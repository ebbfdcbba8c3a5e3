//! Grid error type.

use thiserror::Error;

use ct_core::{AgentId, CoreError, GridPoint};

/// Errors produced by `ct-grid`.
///
/// Only construction and initial placement can fail.  Movement queries treat out-of-bounds
/// points as occupied rather than erroring.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("point {point} is outside the {size}x{size} grid")]
    OutOfBounds { point: GridPoint, size: usize },

    #[error("cannot place {agent} at {point}: cell already holds {occupant}")]
    CellOccupied {
        agent:    AgentId,
        point:    GridPoint,
        occupant: AgentId,
    },

    #[error("{0} agents do not fit in {1} cells")]
    AgentCountExceedsCells(usize, usize),

    #[error(transparent)]
    Size(#[from] CoreError),
}

pub type GridResult<T> = Result<T, GridError>;
