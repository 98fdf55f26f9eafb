//! Graph-subsystem error type.

use thiserror::Error;

use cruise_core::NodeId;

/// Errors produced by `cruise-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {node} out of range for graph with {node_count} nodes")]
    InvalidNode { node: NodeId, node_count: usize },

    #[error("self-loop at {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("edge {from} -> {to} has invalid weight {weight}; weights must be finite and non-negative")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },

    #[error("no path from {from} to {to}")]
    Unreachable { from: NodeId, to: NodeId },
}

pub type GraphResult<T> = Result<T, GraphError>;
