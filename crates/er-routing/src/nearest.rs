//! Nearest hospital with free capacity.
//!
//! One one-to-all search from the ambulance's node, then an argmin over the
//! hospitals whose ICU or ER still has room.  Full hospitals are never
//! selected, however close they are.

use tracing::debug;

use er_core::{NodeId, QueryParams};
use er_network::{Capacity, RoadGraph, Weight};

use crate::dijkstra::{Route, Router};
use crate::RoutingResult;

/// Result of a nearest-hospital query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HospitalOutcome {
    /// The closest hospital with capacity, its capacity, and the route to it.
    Found {
        hospital: NodeId,
        capacity: Capacity,
        route:    Route,
    },
    /// Every hospital is saturated (or the map has none).
    NoCapacity,
    /// Hospitals with capacity exist but every one is cut off by closures
    /// or disconnection.
    Unreachable,
}

impl HospitalOutcome {
    pub fn hospital(&self) -> Option<NodeId> {
        match self {
            HospitalOutcome::Found { hospital, .. } => Some(*hospital),
            _ => None,
        }
    }

    /// Distance to the selected hospital, if one was found.
    pub fn distance(&self) -> Option<Weight> {
        match self {
            HospitalOutcome::Found { route, .. } => Some(route.total_cost),
            _ => None,
        }
    }
}

/// Find the closest hospital with `icu > 0 || er > 0` from `from`.
///
/// Equal distances go to the lowest node id.
pub fn nearest_available_hospital<R: Router + ?Sized>(
    router: &R,
    graph: &RoadGraph,
    from: NodeId,
    params: &QueryParams,
) -> RoutingResult<HospitalOutcome> {
    graph.check_node(from)?;

    let candidates: Vec<(NodeId, Capacity)> = graph.available_hospitals().collect();
    if candidates.is_empty() {
        debug!(from = %from, "no hospital has capacity");
        return Ok(HospitalOutcome::NoCapacity);
    }

    let tree = router.shortest_paths(graph, from, params)?;

    // Candidates arrive in ascending id order; strict `<` keeps the first on ties.
    let mut best: Option<(NodeId, Capacity, Weight)> = None;
    for (id, capacity) in candidates {
        let d = tree.distance(id);
        if best.is_none_or(|(_, _, best_d)| d < best_d) {
            best = Some((id, capacity, d));
        }
    }

    let outcome = match best {
        Some((hospital, capacity, _)) => match tree.route_to(hospital).into_route() {
            Some(route) => HospitalOutcome::Found { hospital, capacity, route },
            None => HospitalOutcome::Unreachable,
        },
        None => HospitalOutcome::Unreachable,
    };

    match &outcome {
        HospitalOutcome::Found { hospital, route, .. } => {
            debug!(from = %from, hospital = %hospital, cost = route.total_cost, "nearest hospital selected")
        }
        _ => debug!(from = %from, "hospitals with capacity are unreachable"),
    }
    Ok(outcome)
}
