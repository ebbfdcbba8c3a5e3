//! Error types for ct-agent.

use thiserror::Error;

use ct_core::{CoreError, GridPoint};

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("population {population} exceeds grid capacity {cells}")]
    PopulationExceedsGrid { population: usize, cells: usize },

    #[error("agent {index} placed at {point}, outside the {size}x{size} grid")]
    OutOfBounds { index: usize, point: GridPoint, size: usize },

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type AgentResult<T> = Result<T, AgentError>;
