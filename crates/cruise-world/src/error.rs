//! Environment error type.

use thiserror::Error;

use cruise_core::NodeId;
use cruise_graph::GraphError;

/// Errors produced by `cruise-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("invalid bounds: low {low} must be strictly less than high {high}")]
    InvalidBounds { low: f64, high: f64 },

    #[error("world configuration error: {0}")]
    Config(String),

    #[error("node {0} is not a parking lot")]
    NotParkingLot(NodeId),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type WorldResult<T> = Result<T, WorldError>;
