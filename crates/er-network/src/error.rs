//! Network-subsystem error type.
//!
//! Every variant is an input-contract violation.  Operations that return one
//! of these leave the graph untouched.

use thiserror::Error;

use er_core::{EdgeId, NodeId, Position};

/// Errors produced by `er-network`.
#[derive(Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("node {id} is outside the graph (vertex count {node_count})")]
    InvalidNodeId { id: NodeId, node_count: usize },

    #[error("no road between {from} and {to}")]
    MissingEdge { from: NodeId, to: NodeId },

    #[error("road {0} does not exist")]
    UnknownRoad(EdgeId),

    #[error("edge weight must be positive and finite, got {0}")]
    InvalidWeight(f64),

    #[error("node {id} position must be finite, got {position}")]
    InvalidPosition { id: NodeId, position: Position },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
