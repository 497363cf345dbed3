//! Benchmark stroke segmentation performance.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rekha::segmentation::{FitConfig, Segment, detect_candidates};
use rekha::{PointSequence, Segmenter, StrokeConfig, StrokeSample};
use std::f64::consts::PI;

/// Square outline with `per_side` samples per side, slowing at each corner.
fn square_stroke(side: f64, per_side: usize) -> Vec<StrokeSample> {
    let step = side / per_side as f64;
    let dirs = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];

    let mut samples = Vec::with_capacity(4 * per_side + 1);
    let (mut x, mut y, mut t) = (0.0, 0.0, 0.0);
    samples.push(StrokeSample::new(x, y, t));

    for (dx, dy) in dirs {
        for i in 1..=per_side {
            x += dx * step;
            y += dy * step;
            // Pen slows over the last and first few samples of each side
            let near_corner = i <= 3 || i + 3 > per_side;
            t += if near_corner { 4.0 } else { 1.0 };
            samples.push(StrokeSample::new(x, y, t));
        }
    }
    samples
}

/// Spiral with steadily tightening curvature.
fn spiral_stroke(n: usize) -> Vec<StrokeSample> {
    (0..n)
        .map(|i| {
            let a = 6.0 * PI * i as f64 / n as f64;
            let r = 200.0 - 25.0 * a / PI;
            StrokeSample::new(r * a.cos(), r * a.sin(), i as f64)
        })
        .collect()
}

fn bench_from_samples(c: &mut Criterion) {
    let samples = square_stroke(400.0, 250);
    let config = StrokeConfig::default();

    c.bench_function("from_samples_1000", |b| {
        b.iter(|| {
            let seq = PointSequence::from_samples(black_box(&samples), &config).unwrap();
            black_box(seq)
        })
    });
}

fn bench_segment_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_square");
    let segmenter = Segmenter::default();

    for per_side in [50, 250, 1000] {
        let samples = square_stroke(400.0, per_side);
        let seq = PointSequence::from_samples(&samples, &StrokeConfig::default()).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(4 * per_side + 1),
            &seq,
            |b, seq| {
                b.iter(|| {
                    let mut stroke = seq.clone();
                    black_box(segmenter.run(&mut stroke).unwrap())
                })
            },
        );
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let samples = spiral_stroke(1000);
    let seq = PointSequence::from_samples(&samples, &StrokeConfig::default()).unwrap();
    let fit = FitConfig::default();

    c.bench_function("detect_candidates_spiral", |b| {
        b.iter(|| black_box(detect_candidates(&seq, &Default::default()).unwrap()))
    });

    c.bench_function("fit_segment_1000", |b| {
        b.iter(|| black_box(Segment::fit(&seq, 0, 999, &fit)))
    });

    c.bench_function("segment_spiral", |b| {
        b.iter(|| {
            let mut stroke = seq.clone();
            black_box(Segmenter::default().run(&mut stroke).unwrap())
        })
    });
}

criterion_group!(benches, bench_from_samples, bench_segment_sizes, bench_stages);
criterion_main!(benches);
