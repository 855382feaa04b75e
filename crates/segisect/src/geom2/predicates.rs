use nalgebra::Vector2;

use super::types::{Orientation, Segment};

/// Raw orientation value `(q.y - p.y)(r.x - q.x) - (q.x - p.x)(r.y - q.y)`.
///
/// Zero iff `p, q, r` are collinear. Positive for a clockwise turn.
#[inline]
pub fn orientation_value(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> f64 {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

/// Sign of [`orientation_value`].
#[inline]
pub fn orientation(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> Orientation {
    let v = orientation_value(p, q, r);
    if v == 0.0 {
        Orientation::Collinear
    } else if v > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// True if both segments lie on one line, or if they straddle each other.
///
/// The second case is the classic straddle test; it is only consulted after the
/// direction vectors were found parallel, where it cannot hold for distinct lines.
pub fn are_collinear(segment1: Segment, segment2: Segment) -> bool {
    let (p, q) = (segment1.start, segment1.end);
    let (r, s) = (segment2.start, segment2.end);
    let o1 = orientation(p, q, r);
    let o2 = orientation(p, q, s);
    let o3 = orientation(r, s, p);
    let o4 = orientation(r, s, q);
    let all_collinear = [o1, o2, o3, o4]
        .iter()
        .all(|&o| o == Orientation::Collinear);
    all_collinear || (o1 != o2 && o3 != o4)
}

/// Bounding-box containment plus exact collinearity.
pub fn is_point_on_segment(point: Vector2<f64>, segment: Segment) -> bool {
    let (p, q) = (segment.start, segment.end);
    point.x >= p.x.min(q.x)
        && point.x <= p.x.max(q.x)
        && point.y >= p.y.min(q.y)
        && point.y <= p.y.max(q.y)
        && orientation(p, q, point) == Orientation::Collinear
}

/// Any endpoint of either segment lies on the other one.
pub fn do_segments_overlap(segment1: Segment, segment2: Segment) -> bool {
    is_point_on_segment(segment1.start, segment2)
        || is_point_on_segment(segment1.end, segment2)
        || is_point_on_segment(segment2.start, segment1)
        || is_point_on_segment(segment2.end, segment1)
}
