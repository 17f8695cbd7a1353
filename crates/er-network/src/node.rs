//! Node attributes: position, label, role, and hospital capacity.
//!
//! Capacity lives inside [`NodeRole::Hospital`], so an intersection cannot
//! carry a non-zero capacity by construction.

use er_core::{Position, SimRng};

/// Upper bound (exclusive) for the default ICU beds drawn for an inferred hospital.
const DEFAULT_ICU_MAX: u32 = 5;
/// Upper bound (exclusive) for the default ER slots drawn for an inferred hospital.
const DEFAULT_ER_MAX: u32 = 10;

/// Label fragments that mark a node as a hospital.
const HOSPITAL_KEYWORDS: [&str; 2] = ["hospital", "emergency"];

// ── Capacity ──────────────────────────────────────────────────────────────────

/// Available ICU beds and ER slots at a hospital.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capacity {
    pub icu: u32,
    pub er:  u32,
}

impl Capacity {
    pub const ZERO: Capacity = Capacity { icu: 0, er: 0 };

    pub fn new(icu: u32, er: u32) -> Self {
        Self { icu, er }
    }

    /// `true` if at least one ICU bed or ER slot is free.
    #[inline]
    pub fn is_available(self) -> bool {
        self.icu > 0 || self.er > 0
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ICU: {}, ER: {}", self.icu, self.er)
    }
}

// ── NodeRole ──────────────────────────────────────────────────────────────────

/// What a node represents on the map.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeRole {
    #[default]
    Intersection,
    Hospital(Capacity),
}

impl NodeRole {
    /// Infer the role from a display label.
    ///
    /// Labels mentioning "hospital" or "emergency" (any case) become
    /// hospitals with capacity drawn from `rng`: ICU in `[0, 5)`, ER in
    /// `[0, 10)`.  Everything else is an intersection and consumes no
    /// randomness.
    pub fn infer(label: &str, rng: &mut SimRng) -> Self {
        let lower = label.to_lowercase();
        if HOSPITAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
            NodeRole::Hospital(Capacity {
                icu: rng.gen_range(0..DEFAULT_ICU_MAX),
                er:  rng.gen_range(0..DEFAULT_ER_MAX),
            })
        } else {
            NodeRole::Intersection
        }
    }

    #[inline]
    pub fn is_hospital(self) -> bool {
        matches!(self, NodeRole::Hospital(_))
    }

    /// Capacity of the node; always [`Capacity::ZERO`] for intersections.
    #[inline]
    pub fn capacity(self) -> Capacity {
        match self {
            NodeRole::Hospital(c)  => c,
            NodeRole::Intersection => Capacity::ZERO,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeRole::Intersection => "intersection",
            NodeRole::Hospital(_)  => "hospital",
        }
    }
}

// ── NodeAttributes ────────────────────────────────────────────────────────────

/// A complete node record, as written by
/// [`RoadGraph::set_node_attributes`](crate::RoadGraph::set_node_attributes).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeAttributes {
    pub position: Position,
    pub label:    String,
    pub role:     NodeRole,
}

impl NodeAttributes {
    pub fn intersection(position: Position, label: impl Into<String>) -> Self {
        Self { position, label: label.into(), role: NodeRole::Intersection }
    }

    pub fn hospital(position: Position, label: impl Into<String>, capacity: Capacity) -> Self {
        Self { position, label: label.into(), role: NodeRole::Hospital(capacity) }
    }
}
