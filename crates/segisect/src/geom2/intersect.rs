use nalgebra::Vector2;

use super::predicates::{are_collinear, do_segments_overlap};
use super::types::{lex_le, IntersectCfg, Intersection, OverlapRule, Segment};
use crate::log::trace;

/// Intersection of two closed segments with the default configuration.
///
/// Returns `None` when the segments are disjoint, `Intersection::Point` for a single
/// shared point and `Intersection::Segment` for a collinear overlap of positive length.
#[inline]
pub fn compute_intersection(segment1: Segment, segment2: Segment) -> Option<Intersection> {
    compute_intersection_with(segment1, segment2, IntersectCfg::default())
}

/// Intersection of two closed segments.
///
/// With `segment1 = (p, q)`, `segment2 = (r, s)` and `d1 = q - p`, `d2 = s - r`:
/// - `d1 × d2 == 0`: parallel lines. Only collinear, overlapping segments intersect,
///   and the result is the overlap region.
/// - otherwise the lines cross at `p + ua·d1 = r + ub·d2`; the segments intersect iff
///   `ua, ub ∈ [0, 1]` (endpoints included).
///
/// The divisor is `d1 × d2`. `(q.y - p.y)(s.x - r.x) - (q.x - p.x)(s.y - r.y)` has the same
/// zero set but the opposite sign; dividing by it negates `ua`, `ub` and rejects crossings
/// such as `(0,0)-(2,2)` × `(0,2)-(2,0)`.
pub fn compute_intersection_with(
    segment1: Segment,
    segment2: Segment,
    cfg: IntersectCfg,
) -> Option<Intersection> {
    let p = segment1.start;
    let r = segment2.start;
    let d1 = segment1.direction();
    let d2 = segment2.direction();

    let denominator = d1.perp(&d2);
    if denominator == 0.0 {
        if !are_collinear(segment1, segment2) {
            trace!("parallel, distinct lines");
            return None;
        }
        if !do_segments_overlap(segment1, segment2) {
            trace!("collinear, disjoint");
            return None;
        }
        let region = overlap_region(segment1, segment2, cfg.overlap);
        trace!(?region, "collinear overlap");
        return Some(region);
    }

    let w = p - r;
    let ua = d2.perp(&w) / denominator;
    let ub = d1.perp(&w) / denominator;
    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        let point = segment1.at(ua);
        trace!(ua, ub, x = point.x, y = point.y, "crossing");
        Some(Intersection::Point(point))
    } else {
        trace!(ua, ub, "lines cross outside the segments");
        None
    }
}

/// Overlap region of two segments already known to be collinear and overlapping.
///
/// Coincident corners give `Intersection::Point`.
pub fn overlap_region(segment1: Segment, segment2: Segment, rule: OverlapRule) -> Intersection {
    let (start, end) = match rule {
        OverlapRule::Componentwise => (
            Vector2::new(
                segment1.start.x.max(segment2.start.x),
                segment1.start.y.max(segment2.start.y),
            ),
            Vector2::new(
                segment1.end.x.min(segment2.end.x),
                segment1.end.y.min(segment2.end.y),
            ),
        ),
        OverlapRule::AlongLine => {
            let a = segment1.lex_sorted();
            let b = segment2.lex_sorted();
            let start = if lex_le(a.start, b.start) { b.start } else { a.start };
            let end = if lex_le(a.end, b.end) { a.end } else { b.end };
            (start, end)
        }
    };
    if start == end {
        Intersection::Point(start)
    } else {
        Intersection::Segment { start, end }
    }
}
