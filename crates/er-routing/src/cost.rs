//! The cost-adjustment policy.
//!
//! [`effective_weight`] is the one place the traffic factor is applied.  The
//! solver calls it for every relaxation, and display code should derive
//! congestion colouring from it (via [`CongestionLevel`]) instead of
//! multiplying weights itself.

use er_core::{EdgeId, QueryParams};
use er_network::{CLOSED, NetworkResult, RoadGraph, Weight};

/// Effective weight above which a road counts as moderately congested.
pub const MODERATE_ABOVE: Weight = 10.0;
/// Effective weight above which a road counts as heavily congested.
pub const HEAVY_ABOVE: Weight = 15.0;

/// Largest cost of an open road or path.  Finite costs that overflow are
/// clamped here so they never read as [`CLOSED`].
pub const MAX_COST: Weight = f64::MAX;

/// Cost of traversing a road whose current weight is `weight`.
///
/// | Severity       | Finite weight         | `CLOSED` |
/// |----------------|-----------------------|----------|
/// | `Critical`     | `weight`              | `CLOSED` |
/// | `NonCritical`  | `weight * traffic`    | `CLOSED` |
///
/// A finite product that overflows saturates at [`MAX_COST`].
#[inline]
pub fn effective_weight(weight: Weight, params: &QueryParams) -> Weight {
    if weight == CLOSED {
        CLOSED
    } else {
        (weight * params.weight_multiplier()).min(MAX_COST)
    }
}

/// Extend a path cost by one road, saturating at [`MAX_COST`].  `CLOSED`
/// on either side stays `CLOSED`.
#[inline]
pub fn extend_cost(path: Weight, road: Weight) -> Weight {
    if path == CLOSED || road == CLOSED {
        CLOSED
    } else {
        (path + road).min(MAX_COST)
    }
}

/// Display bucket for a road under given query parameters.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CongestionLevel {
    Free,
    Moderate,
    Heavy,
    Closed,
}

impl CongestionLevel {
    /// Bucket an already-adjusted weight.
    pub fn classify(effective: Weight) -> Self {
        if effective == CLOSED {
            CongestionLevel::Closed
        } else if effective > HEAVY_ABOVE {
            CongestionLevel::Heavy
        } else if effective > MODERATE_ABOVE {
            CongestionLevel::Moderate
        } else {
            CongestionLevel::Free
        }
    }

    /// Bucket road `road` as the solver would see it under `params`.
    pub fn of_road(graph: &RoadGraph, road: EdgeId, params: &QueryParams) -> NetworkResult<Self> {
        let current = graph.current_weight(road)?;
        Ok(Self::classify(effective_weight(current, params)))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CongestionLevel::Free     => "free",
            CongestionLevel::Moderate => "moderate",
            CongestionLevel::Heavy    => "heavy",
            CongestionLevel::Closed   => "closed",
        }
    }
}

impl std::fmt::Display for CongestionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
