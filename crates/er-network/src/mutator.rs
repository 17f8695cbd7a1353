//! Road closure protocol.
//!
//! After load, these methods are the only writers of a road's current
//! weight.  Closing sets it to [`CLOSED`]; reopening restores the base
//! weight exactly.  Because both travel directions share one road record,
//! a closure requested as `(u, v)` is equally visible as `(v, u)`.
//!
//! Congestion is not stored here: traffic scaling is a query
//! parameter ([`er_core::QueryParams`]), never a stored weight change.
//!
//! Rejected requests (`InvalidNodeId`, `MissingEdge`, `UnknownRoad`) leave
//! the graph untouched.

use tracing::{debug, warn};

use er_core::{EdgeId, NodeId, SimRng};

use crate::network::{CLOSED, RoadGraph};
use crate::NetworkResult;

/// Open/closed state of a road.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadStatus {
    Open,
    Closed,
}

impl RoadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RoadStatus::Open   => "open",
            RoadStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for RoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RoadGraph {
    /// Resolve `(u, v)` to a road, logging rejected requests.
    fn resolve(&self, u: NodeId, v: NodeId, op: &'static str) -> NetworkResult<EdgeId> {
        self.road_between(u, v).inspect_err(|e| {
            warn!(from = %u, to = %v, op, error = %e, "road mutation rejected");
        })
    }

    // ── By endpoint pair ──────────────────────────────────────────────────

    /// Close the road joining `u` and `v` in both directions.
    ///
    /// With parallel roads, only the first one inserted is affected.
    pub fn close_edge(&mut self, u: NodeId, v: NodeId) -> NetworkResult<EdgeId> {
        let road = self.resolve(u, v, "close")?;
        self.close_road(road)?;
        Ok(road)
    }

    /// Restore the road joining `u` and `v` to its base weight.
    pub fn reopen_edge(&mut self, u: NodeId, v: NodeId) -> NetworkResult<EdgeId> {
        let road = self.resolve(u, v, "reopen")?;
        self.reopen_road(road)?;
        Ok(road)
    }

    /// Reopen if closed, close if open.  Returns the new status.
    pub fn toggle_edge(&mut self, u: NodeId, v: NodeId) -> NetworkResult<RoadStatus> {
        let road = self.resolve(u, v, "toggle")?;
        self.toggle_road(road)
    }

    pub fn road_status(&self, u: NodeId, v: NodeId) -> NetworkResult<RoadStatus> {
        let road = self.road_between(u, v)?;
        self.road_status_by_id(road)
    }

    /// `true` if the road joining `u` and `v` is closed.
    pub fn is_closed(&self, u: NodeId, v: NodeId) -> NetworkResult<bool> {
        Ok(self.road_status(u, v)? == RoadStatus::Closed)
    }

    // ── By road id ────────────────────────────────────────────────────────

    pub fn close_road(&mut self, road: EdgeId) -> NetworkResult<()> {
        self.check_road(road)?;
        self.road_current[road.index()] = CLOSED;
        debug!(road = %road, "road closed");
        Ok(())
    }

    pub fn reopen_road(&mut self, road: EdgeId) -> NetworkResult<()> {
        self.check_road(road)?;
        self.road_current[road.index()] = self.base_weight_unchecked(road);
        debug!(road = %road, weight = self.road_current[road.index()], "road reopened");
        Ok(())
    }

    pub fn toggle_road(&mut self, road: EdgeId) -> NetworkResult<RoadStatus> {
        match self.road_status_by_id(road)? {
            RoadStatus::Closed => {
                self.reopen_road(road)?;
                Ok(RoadStatus::Open)
            }
            RoadStatus::Open => {
                self.close_road(road)?;
                Ok(RoadStatus::Closed)
            }
        }
    }

    pub fn road_status_by_id(&self, road: EdgeId) -> NetworkResult<RoadStatus> {
        Ok(if self.current_weight(road)? == CLOSED {
            RoadStatus::Closed
        } else {
            RoadStatus::Open
        })
    }

    // ── Bulk ──────────────────────────────────────────────────────────────

    /// Closed roads in ascending id order.
    pub fn closed_roads(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.road_current
            .iter()
            .enumerate()
            .filter(|(_, w)| **w == CLOSED)
            .map(|(i, _)| EdgeId(i as u32))
    }

    /// Reopen every closed road.  Returns how many were reopened.
    pub fn reopen_all(&mut self) -> usize {
        let closed: Vec<EdgeId> = self.closed_roads().collect();
        for &road in &closed {
            self.road_current[road.index()] = self.base_weight_unchecked(road);
        }
        debug!(reopened = closed.len(), "network reset to base weights");
        closed.len()
    }

    /// Close a random road: pick a node uniformly, then one of its incident
    /// roads uniformly.
    ///
    /// Returns `None` (and changes nothing) when the graph is empty or the
    /// chosen node has no roads.  Closing an already closed road is allowed
    /// and reported like any other.
    pub fn close_random_road(&mut self, rng: &mut SimRng) -> Option<EdgeId> {
        if self.is_empty() {
            return None;
        }
        let node = NodeId(rng.gen_range(0..self.node_count()) as u32);
        let incident: Vec<EdgeId> = self.out_edges(node).map(|e| e.road).collect();
        let road = *rng.choose(&incident)?;
        self.road_current[road.index()] = CLOSED;
        debug!(road = %road, node = %node, "random road closure");
        Some(road)
    }
}
