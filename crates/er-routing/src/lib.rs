//! `er-routing`: shortest paths over a [`RoadGraph`](er_network::RoadGraph)
//! whose costs depend on severity and congestion.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`queue`]    | `MinQueue`: binary-heap priority queue, lazy decrease-key |
//! | [`cost`]     | `effective_weight`, `extend_cost`, `CongestionLevel`       |
//! | [`dijkstra`] | `Router` trait, `DijkstraRouter`, `Route`, `ShortestPaths` |
//! | [`nearest`]  | `nearest_available_hospital`, `HospitalOutcome`            |
//! | [`error`]    | `RoutingError`, `RoutingResult<T>`                         |
//!
//! # Outcomes versus errors
//!
//! An unreachable destination or a saturated hospital set is a normal
//! answer, not a fault: it comes back as a variant of [`RouteOutcome`] or
//! [`HospitalOutcome`] inside `Ok`.  `Err` is reserved for contract
//! violations such as an out-of-range node id.
//!
//! # Example
//!
//! ```
//! use er_core::{NodeId, QueryParams};
//! use er_network::{RoadGraph, RoadType};
//! use er_routing::{DijkstraRouter, Router};
//!
//! let mut g = RoadGraph::new(3);
//! g.add_edge(NodeId(0), NodeId(1), 2.0, RoadType::Local).unwrap();
//! g.add_edge(NodeId(1), NodeId(2), 3.0, RoadType::Local).unwrap();
//!
//! let outcome = DijkstraRouter.route(&g, NodeId(0), NodeId(2), &QueryParams::critical()).unwrap();
//! let route = outcome.route().unwrap();
//! assert_eq!(route.path, vec![NodeId(0), NodeId(1), NodeId(2)]);
//! assert_eq!(route.total_cost, 5.0);
//! ```

pub mod cost;
pub mod dijkstra;
pub mod error;
pub mod nearest;
pub mod queue;

#[cfg(test)]
mod tests;

pub use cost::{CongestionLevel, MAX_COST, effective_weight, extend_cost};
pub use dijkstra::{DijkstraRouter, Route, RouteOutcome, Router, ShortestPaths};
pub use error::{RoutingError, RoutingResult};
pub use nearest::{HospitalOutcome, nearest_available_hospital};
pub use queue::MinQueue;
