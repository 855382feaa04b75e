//! Random segment pairs (replay tokens + optional lattice snapping).
//!
//! Purpose
//! - Deterministic inputs for property tests, benchmarks and the `sample` CLI command.
//!
//! Model
//! - Endpoints are uniform in `[-half_extent, half_extent]²`.
//! - With `lattice = Some(step)` coordinates are rounded to multiples of `step`, so
//!   parallel, collinear and touching configurations show up with exact arithmetic.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::Segment;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SegmentCfg {
    /// Coordinates are drawn from `[-half_extent, half_extent]`.
    pub half_extent: f64,
    /// Snap coordinates to multiples of this step (ignored if not positive).
    pub lattice: Option<f64>,
    /// Probability of forcing the second segment onto the first one's line.
    pub collinear_bias: f64,
}

impl Default for SegmentCfg {
    fn default() -> Self {
        Self {
            half_extent: 4.0,
            lattice: Some(1.0),
            collinear_bias: 0.25,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    /// RNG for this token; neighbouring indices give unrelated streams.
    fn rng(self) -> StdRng {
        let salted = self.index.wrapping_add(GOLDEN_GAMMA);
        StdRng::seed_from_u64(avalanche(self.seed ^ avalanche(salted)))
    }
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 output function.
fn avalanche(x: u64) -> u64 {
    let x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    let x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

impl SegmentCfg {
    fn coord<R: Rng>(&self, rng: &mut R) -> f64 {
        let h = self.half_extent.abs().max(1e-9);
        let v = rng.gen_range(-h..=h);
        match self.lattice {
            Some(step) if step > 0.0 => (v / step).round() * step,
            _ => v,
        }
    }

    fn point<R: Rng>(&self, rng: &mut R) -> Vector2<f64> {
        Vector2::new(self.coord(rng), self.coord(rng))
    }
}

/// Draw a pair of segments for token `tok`.
///
/// With probability `collinear_bias` the second segment is placed on the first one's
/// line, at integer multiples of its direction, so the collinear branch is exercised.
pub fn draw_segment_pair(cfg: SegmentCfg, tok: ReplayToken) -> (Segment, Segment) {
    let mut rng = tok.rng();
    let a = Segment::new(cfg.point(&mut rng), cfg.point(&mut rng));
    let bias = cfg.collinear_bias.clamp(0.0, 1.0);
    let b = if rng.gen_bool(bias) {
        let d = a.direction();
        let k0: i32 = rng.gen_range(-2..=2);
        let k1: i32 = rng.gen_range(-2..=2);
        Segment::new(a.start + d * f64::from(k0), a.start + d * f64::from(k1))
    } else {
        Segment::new(cfg.point(&mut rng), cfg.point(&mut rng))
    };
    (a, b)
}
