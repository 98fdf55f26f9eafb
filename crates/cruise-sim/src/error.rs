use cruise_agent::AgentError;
use cruise_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("step limit of {limit} exceeded before arrival")]
    StepLimitExceeded { limit: u64 },

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("world error: {0}")]
    World(#[from] WorldError),
}

pub type SimResult<T> = Result<T, SimError>;
