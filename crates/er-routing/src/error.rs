//! Routing-subsystem error type.

use thiserror::Error;

use er_network::NetworkError;

/// Errors produced by `er-routing`.
///
/// "No path" and "no capacity" are not here: they are ordinary outcomes.
#[derive(Debug, Error, PartialEq)]
pub enum RoutingError {
    /// A query named a node outside the graph, or similar input violation.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// `pop_min` on an empty queue.  The solver checks emptiness before
    /// popping, so this signals a logic error rather than bad input.
    #[error("pop from an empty priority queue")]
    EmptyQueue,
}

pub type RoutingResult<T> = Result<T, RoutingError>;
