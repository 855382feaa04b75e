//! Criterion benchmarks for segment intersection.
//! Inputs: 1024 pre-drawn random lattice pairs per bias (cycled), plus fixed crossing /
//! parallel / collinear pairs.
//! Results: under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use segisect::geom2::rand::{draw_segment_pair, ReplayToken, SegmentCfg};
use segisect::{compute_intersection, compute_intersection_with, IntersectCfg, OverlapRule, Segment};

fn bench_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect_fixed");
    let cases = [
        (
            "crossing",
            Segment::from_coords(0.0, 0.0, 2.0, 2.0),
            Segment::from_coords(0.0, 2.0, 2.0, 0.0),
        ),
        (
            "parallel",
            Segment::from_coords(0.0, 0.0, 1.0, 0.0),
            Segment::from_coords(0.0, 1.0, 1.0, 1.0),
        ),
        (
            "collinear_overlap",
            Segment::from_coords(0.0, 0.0, 4.0, 0.0),
            Segment::from_coords(2.0, 0.0, 6.0, 0.0),
        ),
    ];
    for (name, a, b) in cases {
        group.bench_with_input(BenchmarkId::new("componentwise", name), &(a, b), |bch, &(a, b)| {
            bch.iter(|| compute_intersection(black_box(a), black_box(b)))
        });
        let cfg = IntersectCfg {
            overlap: OverlapRule::AlongLine,
        };
        group.bench_with_input(BenchmarkId::new("along_line", name), &(a, b), |bch, &(a, b)| {
            bch.iter(|| compute_intersection_with(black_box(a), black_box(b), cfg))
        });
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect_random");
    for &bias in &[0.0f64, 0.25, 1.0] {
        let cfg = SegmentCfg {
            collinear_bias: bias,
            ..SegmentCfg::default()
        };
        let pairs: Vec<(Segment, Segment)> = (0..1024)
            .map(|i| draw_segment_pair(cfg, ReplayToken::new(42, i)))
            .collect();
        group.bench_with_input(BenchmarkId::new("lattice", bias), &pairs, |b, pairs| {
            let mut i = 0usize;
            b.iter(|| {
                let (s1, s2) = pairs[i % pairs.len()];
                i = i.wrapping_add(1);
                compute_intersection(black_box(s1), black_box(s2))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fixed, bench_random);
criterion_main!(benches);
