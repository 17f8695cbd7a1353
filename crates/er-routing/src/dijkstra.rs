//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers route through the [`Router`] trait, so an application can swap
//! in A*, a contraction hierarchy, or a recorded-route stub without
//! touching the nearest-hospital query built on top of it.
//!
//! # Purity
//!
//! A query is a function of `(graph, endpoints, params)` only.  The router
//! holds no state between calls and never mutates the graph.

use tracing::debug;

use er_core::{NodeId, QueryParams};
use er_network::{RoadGraph, Weight};

use crate::cost::{effective_weight, extend_cost};
use crate::queue::MinQueue;
use crate::RoutingResult;

// ── Route ─────────────────────────────────────────────────────────────────────

/// A path from source to destination and its total effective cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Node ids from source to destination inclusive.  Never empty.
    pub path: Vec<NodeId>,
    pub total_cost: Weight,
}

impl Route {
    /// `true` if source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.path.len() == 1
    }

    /// Number of roads traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of a single-pair query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteOutcome {
    Found(Route),
    /// The destination is disconnected from the source, or every connecting
    /// road is closed.
    NoPath { from: NodeId, to: NodeId },
}

impl RouteOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(r)     => Some(r),
            RouteOutcome::NoPath { .. } => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            RouteOutcome::Found(r)     => Some(r),
            RouteOutcome::NoPath { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// One-to-all result: final distances and predecessor links from `source`.
///
/// Unreachable nodes have distance `f64::INFINITY` and no predecessor.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: NodeId,
    dist:   Vec<Weight>,
    prev:   Vec<NodeId>,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance to `node`; infinite if unreachable or out of range.
    pub fn distance(&self, node: NodeId) -> Weight {
        self.dist.get(node.index()).copied().unwrap_or(Weight::INFINITY)
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_finite()
    }

    /// Distances indexed by `NodeId`.
    pub fn distances(&self) -> &[Weight] {
        &self.dist
    }

    /// Predecessor of `node` on its shortest path, if any.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.prev.get(node.index()).copied().filter(|p| p.is_valid())
    }

    /// Walk predecessor links back from `to` and reverse.
    pub fn path_to(&self, to: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(to) {
            return None;
        }
        let mut path = vec![to];
        let mut cur = to;
        while let Some(p) = self.predecessor(cur) {
            path.push(p);
            cur = p;
        }
        path.reverse();
        debug_assert_eq!(path[0], self.source);
        Some(path)
    }

    pub fn route_to(&self, to: NodeId) -> RouteOutcome {
        match self.path_to(to) {
            Some(path) => RouteOutcome::Found(Route { path, total_cost: self.distance(to) }),
            None => RouteOutcome::NoPath { from: self.source, to },
        }
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can serve queries
/// from several threads that share read access to the graph.
pub trait Router: Send + Sync {
    /// Fastest route from `from` to `to` under `params`.
    ///
    /// `from == to` yields a one-node route of cost zero.
    fn route(
        &self,
        graph: &RoadGraph,
        from: NodeId,
        to: NodeId,
        params: &QueryParams,
    ) -> RoutingResult<RouteOutcome>;

    /// Final distances from `from` to every node under `params`.
    fn shortest_paths(
        &self,
        graph: &RoadGraph,
        from: NodeId,
        params: &QueryParams,
    ) -> RoutingResult<ShortestPaths>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm with a binary-heap queue and lazy deletion.
///
/// Edge costs come from [`effective_weight`]: unscaled for critical
/// transport, scaled by the traffic factor otherwise, and closed roads stay
/// impassable in every mode.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        graph: &RoadGraph,
        from: NodeId,
        to: NodeId,
        params: &QueryParams,
    ) -> RoutingResult<RouteOutcome> {
        graph.check_node(from)?;
        graph.check_node(to)?;

        let outcome = dijkstra(graph, from, Some(to), params)?.route_to(to);
        match &outcome {
            RouteOutcome::Found(r) => debug!(
                from = %from, to = %to, severity = %params.severity, traffic = %params.traffic,
                cost = r.total_cost, hops = r.hops(), "route found"
            ),
            RouteOutcome::NoPath { .. } => debug!(
                from = %from, to = %to, severity = %params.severity, "no path"
            ),
        }
        Ok(outcome)
    }

    fn shortest_paths(
        &self,
        graph: &RoadGraph,
        from: NodeId,
        params: &QueryParams,
    ) -> RoutingResult<ShortestPaths> {
        graph.check_node(from)?;
        dijkstra(graph, from, None, params)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Core search.  With `target = Some(t)` the search stops as soon as `t` is
/// settled, so only `t`'s entry in the result is guaranteed final.
fn dijkstra(
    graph: &RoadGraph,
    source: NodeId,
    target: Option<NodeId>,
    params: &QueryParams,
) -> RoutingResult<ShortestPaths> {
    let n = graph.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![Weight::INFINITY; n];
    // prev[v] = node that reached v; NodeId::INVALID for unreached nodes.
    let mut prev = vec![NodeId::INVALID; n];

    dist[source.index()] = 0.0;

    let mut queue = MinQueue::with_capacity(n);
    queue.push(0.0, source);

    while !queue.is_empty() {
        let (d, node) = queue.pop_min()?;

        // Skip stale queue entries.
        if d > dist[node.index()] {
            continue;
        }

        if target == Some(node) {
            break;
        }

        for edge in graph.out_edges(node) {
            let new_cost = extend_cost(d, effective_weight(edge.weight, params));
            let slot = edge.to.index();

            // A closed road yields +inf, which never compares below anything.
            if new_cost < dist[slot] {
                dist[slot] = new_cost;
                prev[slot] = node;
                queue.push(new_cost, edge.to);
            }
        }
    }

    Ok(ShortestPaths { source, dist, prev })
}
