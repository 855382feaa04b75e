//! Segment intersection in the plane.
//!
//! Pipeline
//! - `orientation`: sign of a cross product of three points (leaf primitive).
//! - `are_collinear`, `is_point_on_segment`: built on orientation.
//! - `do_segments_overlap`: built on point-on-segment.
//! - `overlap_region`: min/max of endpoint coordinates (or along-line order, see `OverlapRule`).
//! - `compute_intersection`: parallel test, then either the overlap branch or the
//!   parametric crossing formula.
//!
//! All comparisons are exact. Results are `Option<Intersection>`; `None` means the
//! segments are disjoint.

mod intersect;
mod predicates;
pub mod rand;
mod types;

pub use intersect::{compute_intersection, compute_intersection_with, overlap_region};
pub use predicates::{
    are_collinear, do_segments_overlap, is_point_on_segment, orientation, orientation_value,
};
pub use types::{IntersectCfg, Intersection, Orientation, OverlapRule, Segment};
