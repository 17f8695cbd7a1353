//! Per-query routing parameters.
//!
//! The engine holds no global simulation state: every query receives its
//! severity mode and traffic factor explicitly through [`QueryParams`].
//! "Rush hour" is therefore just a different `QueryParams` value; the road
//! graph is never rescaled.

use std::str::FromStr;

use crate::{EngineError, EngineResult};

// ── SeverityMode ──────────────────────────────────────────────────────────────

/// How urgent the transport is, which decides whether congestion applies.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeverityMode {
    /// Congestion-blind: edge weights are used unscaled.
    #[default]
    Critical,
    /// Congestion-sensitive: finite edge weights are multiplied by the
    /// traffic factor.
    NonCritical,
}

impl SeverityMode {
    /// `true` when the traffic factor participates in edge costs.
    #[inline]
    pub fn is_traffic_sensitive(self) -> bool {
        matches!(self, SeverityMode::NonCritical)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityMode::Critical    => "critical",
            SeverityMode::NonCritical => "non-critical",
        }
    }
}

impl std::fmt::Display for SeverityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(SeverityMode::Critical),
            "non-critical" | "noncritical" | "non_critical" => Ok(SeverityMode::NonCritical),
            other => Err(EngineError::UnknownSeverity(other.to_owned())),
        }
    }
}

// ── TrafficFactor ─────────────────────────────────────────────────────────────

/// Congestion multiplier: a positive, finite `f64`.
///
/// Construction validates the value, so any `TrafficFactor` in hand is safe
/// to multiply into a finite edge weight.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct TrafficFactor(f64);

impl TrafficFactor {
    /// Free-flowing traffic; scaling by this is the identity.
    pub const NEUTRAL: TrafficFactor = TrafficFactor(1.0);
    /// The fixed value the rush-hour simulation sets.
    pub const RUSH_HOUR: TrafficFactor = TrafficFactor(2.0);
    /// Lower end of the typical slider range.
    pub const MIN: TrafficFactor = TrafficFactor(0.5);
    /// Upper end of the typical slider range.
    pub const MAX: TrafficFactor = TrafficFactor(3.0);

    pub fn new(factor: f64) -> EngineResult<Self> {
        if factor.is_finite() && factor > 0.0 {
            Ok(TrafficFactor(factor))
        } else {
            Err(EngineError::InvalidTrafficFactor(factor))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// `true` if the value lies within the typical `[MIN, MAX]` range.
    pub fn is_typical(self) -> bool {
        self >= Self::MIN && self <= Self::MAX
    }
}

impl Default for TrafficFactor {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<f64> for TrafficFactor {
    type Error = EngineError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        TrafficFactor::new(value)
    }
}

impl From<TrafficFactor> for f64 {
    fn from(factor: TrafficFactor) -> f64 {
        factor.0
    }
}

impl std::fmt::Display for TrafficFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}x", self.0)
    }
}

// ── QueryParams ───────────────────────────────────────────────────────────────

/// Everything besides the graph and endpoints that shapes a routing query.
///
/// # Example
///
/// ```
/// use er_core::{QueryParams, SeverityMode, TrafficFactor};
///
/// let params = QueryParams::default()
///     .with_severity(SeverityMode::NonCritical)
///     .rush_hour();
/// assert_eq!(params.traffic, TrafficFactor::RUSH_HOUR);
/// ```
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryParams {
    pub severity: SeverityMode,
    pub traffic:  TrafficFactor,
}

impl QueryParams {
    pub fn new(severity: SeverityMode, traffic: TrafficFactor) -> Self {
        Self { severity, traffic }
    }

    /// Critical transport at neutral traffic.
    pub fn critical() -> Self {
        Self::new(SeverityMode::Critical, TrafficFactor::NEUTRAL)
    }

    /// Non-critical transport under the given congestion.
    pub fn non_critical(traffic: TrafficFactor) -> Self {
        Self::new(SeverityMode::NonCritical, traffic)
    }

    pub fn with_severity(self, severity: SeverityMode) -> Self {
        Self { severity, ..self }
    }

    /// Replace the traffic factor.  Factors never compound: the new value
    /// overrides whatever was set before.
    pub fn with_traffic(self, traffic: TrafficFactor) -> Self {
        Self { traffic, ..self }
    }

    /// Simulate heavy congestion by setting the factor to
    /// [`TrafficFactor::RUSH_HOUR`].  Repeated calls are idempotent.
    pub fn rush_hour(self) -> Self {
        self.with_traffic(TrafficFactor::RUSH_HOUR)
    }

    /// The multiplier actually applied to finite edge weights: the traffic
    /// factor for non-critical queries, `1.0` for critical ones.
    #[inline]
    pub fn weight_multiplier(&self) -> f64 {
        if self.severity.is_traffic_sensitive() {
            self.traffic.get()
        } else {
            1.0
        }
    }
}
