//! Agent-subsystem error type.

use thiserror::Error;

use cruise_core::NodeId;
use cruise_graph::GraphError;
use cruise_world::WorldError;

/// Errors produced by `cruise-agent`.
///
/// All variants surface synchronously out of [`Agent::step`][crate::Agent::step]
/// or construction; nothing is retried or substituted internally.  A failed
/// step leaves the agent exactly as it was.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent configuration error: {0}")]
    Config(String),

    #[error("node {node} out of range for world with {node_count} nodes")]
    InvalidNode { node: NodeId, node_count: usize },

    #[error("no parking lot is available in the environment")]
    NoLotAvailable,

    #[error("target lot {to} is unreachable from {from}")]
    UnreachableTarget { from: NodeId, to: NodeId },

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("world error: {0}")]
    World(#[from] WorldError),
}

pub type AgentResult<T> = Result<T, AgentError>;
