use ct_agent::AgentError;
use ct_core::CoreError;
use ct_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("population setup failed: {0}")]
    Agent(#[from] AgentError),

    #[error("grid placement failed: {0}")]
    Grid(#[from] GridError),

    #[error("invariant violated at {tick}: {detail}")]
    Invariant { tick: ct_core::Tick, detail: String },
}

pub type SimResult<T> = Result<T, SimError>;
