//! Planar position type.
//!
//! Positions are canvas coordinates carried as node metadata.  They never
//! influence route cost; they exist for display and for snapping a pointer
//! to the nearest node or road.

/// A 2-D point in canvas space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Cheaper than [`distance`](Self::distance)
    /// when only comparisons are needed.
    /// `true` if both coordinates are finite (no NaN or infinity).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn distance_sq(self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Shortest distance from `self` to the segment `a`–`b`.
    ///
    /// Degenerates to point distance when `a == b`.
    pub fn distance_to_segment(self, a: Position, b: Position) -> f32 {
        let len_sq = a.distance_sq(b);
        if len_sq == 0.0 {
            return self.distance(a);
        }
        // Projection of self onto the segment, clamped to its endpoints.
        let t = (((self.x - a.x) * (b.x - a.x) + (self.y - a.y) * (b.y - a.y)) / len_sq)
            .clamp(0.0, 1.0);
        let foot = Position::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y));
        self.distance(foot)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
