//! Intersection of two 2D line segments.
//!
//! The whole algorithm lives in [`geom2`]: a short pipeline of exact predicates
//! (orientation, collinearity, point-on-segment, overlap) feeding one top-level
//! routine, [`compute_intersection`]. Every call is pure and O(1).
//!
//! Arithmetic is plain `f64` with exact comparisons against zero; there are no
//! tolerances. Callers are expected to pass finite coordinates.

pub mod geom2;
mod log;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{
    compute_intersection, compute_intersection_with, IntersectCfg, Intersection, Orientation,
    OverlapRule, Segment,
};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_segment_pair, ReplayToken, SegmentCfg};
    pub use crate::geom2::{
        are_collinear, compute_intersection, compute_intersection_with, do_segments_overlap,
        is_point_on_segment, orientation, orientation_value, overlap_region, IntersectCfg,
        Intersection, Orientation, OverlapRule, Segment,
    };
    pub use nalgebra::Vector2 as Vec2;
}
