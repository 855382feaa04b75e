//! Value types for segment intersection.
//!
//! - `Segment`: closed segment between two points; direction only matters for display
//!   and for the componentwise overlap rule.
//! - `Intersection`: either a single point or a non-degenerate shared sub-segment.
//! - `Orientation`: sign of the three-point cross product.
//! - `IntersectCfg` / `OverlapRule`: how the collinear overlap region is computed.

use nalgebra::Vector2;

/// Closed segment `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Vector2::new(x1, y1), Vector2::new(x2, y2))
    }

    /// Same point set, endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }

    /// Point at parameter `t` (0 = start, 1 = end).
    #[inline]
    pub fn at(&self, t: f64) -> Vector2<f64> {
        self.start + self.direction() * t
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Endpoints ordered lexicographically (x, then y).
    #[inline]
    pub fn lex_sorted(&self) -> Self {
        if lex_le(self.start, self.end) {
            *self
        } else {
            self.reversed()
        }
    }
}

#[inline]
pub(crate) fn lex_le(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    a.x < b.x || (a.x == b.x && a.y <= b.y)
}

/// Non-empty intersection of two segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// Unique crossing point, or a collinear overlap that collapsed to one point.
    Point(Vector2<f64>),
    /// Shared sub-segment of two collinear segments; `start != end`.
    Segment {
        start: Vector2<f64>,
        end: Vector2<f64>,
    },
}

impl Intersection {
    #[inline]
    pub fn is_point(&self) -> bool {
        matches!(self, Intersection::Point(_))
    }

    /// The sub-segment as a `Segment`, if this is the overlap variant.
    #[inline]
    pub fn as_segment(&self) -> Option<Segment> {
        match *self {
            Intersection::Point(_) => None,
            Intersection::Segment { start, end } => Some(Segment::new(start, end)),
        }
    }
}

/// Turning direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

/// Rule for the overlap region of two collinear, overlapping segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlapRule {
    /// `(max of starts, min of ends)` taken per coordinate.
    ///
    /// Pre: each segment is given with `start <= end` componentwise. For other inputs
    /// the region can come out inverted or off the line.
    #[default]
    Componentwise,
    /// Order endpoints lexicographically first, then take the later start and the
    /// earlier end. Correct for collinear segments in any direction.
    AlongLine,
}

/// Intersection configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntersectCfg {
    pub overlap: OverlapRule,
}
