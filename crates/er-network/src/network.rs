//! Road graph representation.
//!
//! # Data layout
//!
//! Nodes and roads are stored as parallel arrays (structure of arrays),
//! indexed by `NodeId` and `EdgeId` respectively.  Adjacency is a per-node
//! list of [`Link`]s; each link names its target and the road record it
//! travels over:
//!
//! ```text
//! adjacency[u] = [ Link { to: v, road: e }, ... ]
//! road_current[e], road_base[e], road_ends[e] = (u, v)
//! ```
//!
//! An undirected road inserted as `(u, v)` yields one link in `adjacency[u]`
//! and one in `adjacency[v]`, both pointing at the same road record.  The
//! two travel directions therefore cannot drift apart: there is only one
//! current weight to mutate.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps canvas positions to the nearest `NodeId`.
//! Entries are replaced whenever a node's position is rewritten.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use tracing::debug;

use er_core::{EdgeId, NodeId, Position, SimRng};

use crate::node::{Capacity, NodeAttributes, NodeRole};
use crate::road::RoadType;
use crate::{NetworkError, NetworkResult};

/// Edge cost.  Non-negative; [`CLOSED`] marks an impassable road.
pub type Weight = f64;

/// Current weight of a closed road.  Behaves as positive infinity, so any
/// finite sum that includes it stays infinite and never beats a finite
/// alternative.
pub const CLOSED: Weight = f64::INFINITY;

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index.
#[derive(Clone, PartialEq)]
struct NodeEntry {
    point: [f32; 2], // [x, y]
    id: NodeId,
}

impl NodeEntry {
    fn new(id: NodeId, pos: Position) -> Self {
        Self { point: [pos.x, pos.y], id }
    }
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

/// One direction of travel over a road.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Link {
    to:   NodeId,
    road: EdgeId,
}

/// A directed view of a road as seen from its tail node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OutEdge {
    pub road:   EdgeId,
    pub to:     NodeId,
    /// Current weight of the road ([`CLOSED`] if closed).
    pub weight: Weight,
}

impl OutEdge {
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.weight == CLOSED
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Undirected weighted road graph with a fixed vertex count.
///
/// Nodes `0 .. vertex_count` exist from construction; there is no node
/// insertion or removal.  Reloading a network means building a new
/// `RoadGraph`.  Fields are private: after load, the only write path to
/// road weights is the closure API in [`mutator`](crate::mutator).
pub struct RoadGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    node_pos:   Vec<Position>,
    node_label: Vec<String>,
    node_role:  Vec<NodeRole>,

    // ── Adjacency ─────────────────────────────────────────────────────────
    adjacency: Vec<Vec<Link>>,

    // ── Road data (indexed by EdgeId) ─────────────────────────────────────
    road_ends:    Vec<(NodeId, NodeId)>,
    road_base:    Vec<Weight>,
    pub(crate) road_current: Vec<Weight>,
    road_type:    Vec<RoadType>,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<NodeEntry>,
}

impl RoadGraph {
    /// Create a graph with `vertex_count` nodes and no roads.
    ///
    /// Every node starts as an intersection labelled `"Node {id}"` at the
    /// origin.
    ///
    /// # Example
    ///
    /// ```
    /// use er_network::{RoadGraph, RoadType};
    /// use er_core::NodeId;
    ///
    /// let mut g = RoadGraph::new(2);
    /// g.add_edge(NodeId(0), NodeId(1), 4.0, RoadType::Highway).unwrap();
    /// assert_eq!(g.road_count(), 1);
    /// assert_eq!(g.out_degree(NodeId(1)), 1);
    /// ```
    pub fn new(vertex_count: usize) -> Self {
        let ids = (0..vertex_count).map(|i| NodeId(i as u32));
        let entries: Vec<NodeEntry> = ids
            .clone()
            .map(|id| NodeEntry::new(id, Position::ORIGIN))
            .collect();
        Self {
            node_pos:     vec![Position::ORIGIN; vertex_count],
            node_label:   ids.map(|id| format!("Node {}", id.0)).collect(),
            node_role:    vec![NodeRole::Intersection; vertex_count],
            adjacency:    vec![Vec::new(); vertex_count],
            road_ends:    Vec::new(),
            road_base:    Vec::new(),
            road_current: Vec::new(),
            road_type:    Vec::new(),
            spatial_idx:  RTree::bulk_load(entries),
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    /// Vertex count `V`, fixed at construction.
    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of undirected roads.
    pub fn road_count(&self) -> usize {
        self.road_ends.len()
    }

    /// Number of directional edge records (two per road).
    pub fn directed_edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// `Ok(())` if `id` lies in `[0, V)`.
    #[inline]
    pub fn check_node(&self, id: NodeId) -> NetworkResult<()> {
        if id.index() < self.node_count() {
            Ok(())
        } else {
            Err(NetworkError::InvalidNodeId { id, node_count: self.node_count() })
        }
    }

    #[inline]
    pub(crate) fn check_road(&self, road: EdgeId) -> NetworkResult<()> {
        if road.index() < self.road_count() {
            Ok(())
        } else {
            Err(NetworkError::UnknownRoad(road))
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Insert an undirected road between `u` and `v`.
    ///
    /// Both travel directions start with `current == base == weight`.
    /// Adding the same pair twice creates a parallel road; both take part in
    /// routing.
    pub fn add_edge(
        &mut self,
        u: NodeId,
        v: NodeId,
        weight: Weight,
        road_type: RoadType,
    ) -> NetworkResult<EdgeId> {
        self.check_node(u)?;
        self.check_node(v)?;
        if !(weight.is_finite() && weight > 0.0) {
            return Err(NetworkError::InvalidWeight(weight));
        }

        let road = EdgeId(self.road_ends.len() as u32);
        self.road_ends.push((u, v));
        self.road_base.push(weight);
        self.road_current.push(weight);
        self.road_type.push(road_type);
        self.adjacency[u.index()].push(Link { to: v, road });
        self.adjacency[v.index()].push(Link { to: u, road });
        Ok(road)
    }

    /// Overwrite every attribute of node `id`.  Idempotent.
    ///
    /// Non-finite positions are rejected; the spatial index cannot order them.
    pub fn set_node_attributes(&mut self, id: NodeId, attrs: NodeAttributes) -> NetworkResult<()> {
        self.check_node(id)?;
        if !attrs.position.is_finite() {
            return Err(NetworkError::InvalidPosition { id, position: attrs.position });
        }
        let i = id.index();

        let old = NodeEntry::new(id, self.node_pos[i]);
        self.spatial_idx.remove(&old);
        self.spatial_idx.insert(NodeEntry::new(id, attrs.position));

        self.node_pos[i]   = attrs.position;
        self.node_label[i] = attrs.label;
        self.node_role[i]  = attrs.role;
        Ok(())
    }

    /// Set position and label, inferring role and capacity from the label.
    ///
    /// See [`NodeRole::infer`].  Capacity for inferred hospitals comes from
    /// `rng`, so the result is reproducible for a fixed seed.
    pub fn assign_coordinates(
        &mut self,
        id: NodeId,
        position: Position,
        label: impl Into<String>,
        rng: &mut SimRng,
    ) -> NetworkResult<NodeRole> {
        self.check_node(id)?;
        let label = label.into();
        let role = NodeRole::infer(&label, rng);
        self.set_node_attributes(id, NodeAttributes { position, label, role })?;
        if role.is_hospital() {
            debug!(node = %id, label = %self.node_label[id.index()], capacity = %role.capacity(), "inferred hospital");
        }
        Ok(role)
    }

    // ── Node queries ──────────────────────────────────────────────────────

    pub fn position(&self, id: NodeId) -> NetworkResult<Position> {
        self.check_node(id)?;
        Ok(self.node_pos[id.index()])
    }

    pub fn label(&self, id: NodeId) -> NetworkResult<&str> {
        self.check_node(id)?;
        Ok(&self.node_label[id.index()])
    }

    pub fn role(&self, id: NodeId) -> NetworkResult<NodeRole> {
        self.check_node(id)?;
        Ok(self.node_role[id.index()])
    }

    /// Capacity of `id`; zero for intersections.
    pub fn capacity(&self, id: NodeId) -> NetworkResult<Capacity> {
        self.role(id).map(NodeRole::capacity)
    }

    /// Snapshot of every attribute of `id`.
    pub fn node_attributes(&self, id: NodeId) -> NetworkResult<NodeAttributes> {
        self.check_node(id)?;
        let i = id.index();
        Ok(NodeAttributes {
            position: self.node_pos[i],
            label:    self.node_label[i].clone(),
            role:     self.node_role[i],
        })
    }

    /// `true` for a hospital whose ICU and ER are both full.
    pub fn is_saturated_hospital(&self, id: NodeId) -> NetworkResult<bool> {
        Ok(match self.role(id)? {
            NodeRole::Hospital(c)  => !c.is_available(),
            NodeRole::Intersection => false,
        })
    }

    /// All node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count()).map(|i| NodeId(i as u32))
    }

    /// Every hospital with its capacity, in ascending id order.
    pub fn hospitals(&self) -> impl Iterator<Item = (NodeId, Capacity)> + '_ {
        self.node_role
            .iter()
            .enumerate()
            .filter_map(|(i, role)| match role {
                NodeRole::Hospital(c)  => Some((NodeId(i as u32), *c)),
                NodeRole::Intersection => None,
            })
    }

    /// Hospitals with at least one free ICU bed or ER slot, ascending id order.
    pub fn available_hospitals(&self) -> impl Iterator<Item = (NodeId, Capacity)> + '_ {
        self.hospitals().filter(|(_, c)| c.is_available())
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Outgoing directional records of `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// If `node` is out of range.  Validate with [`check_node`](Self::check_node)
    /// first; the solver does so once per query rather than per edge.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = OutEdge> + '_ {
        self.adjacency[node.index()].iter().map(|link| OutEdge {
            road:   link.road,
            to:     link.to,
            weight: self.road_current[link.road.index()],
        })
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.adjacency[node.index()].len()
    }

    /// First road joining `u` and `v` (in `u`'s insertion order), if any.
    pub fn find_road(&self, u: NodeId, v: NodeId) -> NetworkResult<Option<EdgeId>> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.adjacency[u.index()]
            .iter()
            .find(|link| link.to == v)
            .map(|link| link.road))
    }

    /// Like [`find_road`](Self::find_road) but a missing road is an error.
    pub fn road_between(&self, u: NodeId, v: NodeId) -> NetworkResult<EdgeId> {
        self.find_road(u, v)?
            .ok_or(NetworkError::MissingEdge { from: u, to: v })
    }

    /// Every road exactly once, in insertion order, as `(id, u, v)`.
    pub fn roads(&self) -> impl Iterator<Item = (EdgeId, NodeId, NodeId)> + '_ {
        self.road_ends
            .iter()
            .enumerate()
            .map(|(i, &(u, v))| (EdgeId(i as u32), u, v))
    }

    // ── Road queries ──────────────────────────────────────────────────────

    pub fn road_ends(&self, road: EdgeId) -> NetworkResult<(NodeId, NodeId)> {
        self.check_road(road)?;
        Ok(self.road_ends[road.index()])
    }

    pub fn base_weight(&self, road: EdgeId) -> NetworkResult<Weight> {
        self.check_road(road)?;
        Ok(self.road_base[road.index()])
    }

    pub fn current_weight(&self, road: EdgeId) -> NetworkResult<Weight> {
        self.check_road(road)?;
        Ok(self.road_current[road.index()])
    }

    pub fn road_type(&self, road: EdgeId) -> NetworkResult<&RoadType> {
        self.check_road(road)?;
        Ok(&self.road_type[road.index()])
    }

    #[inline]
    pub(crate) fn base_weight_unchecked(&self, road: EdgeId) -> Weight {
        self.road_base[road.index()]
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The node nearest to `pos`, or `None` for an empty graph.
    pub fn snap_to_node(&self, pos: Position) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }

    /// Up to `k` nearest nodes to `pos`, sorted by ascending distance.
    pub fn k_nearest_nodes(&self, pos: Position, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }

    /// The road whose drawn segment passes closest to `pos`, with that
    /// distance.  Ties go to the lower road id.  `None` if there are no roads.
    pub fn nearest_road(&self, pos: Position) -> Option<(EdgeId, f32)> {
        self.roads()
            .map(|(id, u, v)| {
                let d = pos.distance_to_segment(self.node_pos[u.index()], self.node_pos[v.index()]);
                (id, d)
            })
            .fold(None, |best: Option<(EdgeId, f32)>, cand| match best {
                Some(b) if b.1 <= cand.1 => Some(b),
                _ => Some(cand),
            })
    }
}
