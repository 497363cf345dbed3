//! Test utilities for rekha.
//!
//! Stroke generators for the shapes the integration tests segment. Samples
//! are one unit apart and one time unit apart unless a slowdown is requested.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rekha::{PointSequence, StrokeConfig, StrokeSample};

/// Time step used while the pen slows around a corner.
pub const SLOW_STEP: f64 = 4.0;

/// Half-width (in samples) of the slowdown around each corner.
pub const SLOW_RADIUS: usize = 5;

/// Build a polyline stroke from `(dx, dy, steps)` legs with unit steps.
///
/// Returns the samples and the index of every joint between legs. Time runs
/// one unit per sample, except `SLOW_STEP` within `SLOW_RADIUS` of a joint.
pub fn polyline(start: (f64, f64), legs: &[(f64, f64, usize)]) -> (Vec<StrokeSample>, Vec<usize>) {
    let mut points = vec![start];
    let mut joints = Vec::new();

    for (k, &(dx, dy, steps)) in legs.iter().enumerate() {
        let (x0, y0) = points[points.len() - 1];
        for s in 1..=steps {
            points.push((x0 + dx * s as f64, y0 + dy * s as f64));
        }
        if k + 1 < legs.len() {
            joints.push(points.len() - 1);
        }
    }

    let mut samples = Vec::with_capacity(points.len());
    let mut t = 0.0;
    for (i, &(x, y)) in points.iter().enumerate() {
        if i > 0 {
            let slow = joints.iter().any(|&j| i + SLOW_RADIUS >= j && i <= j + SLOW_RADIUS);
            t += if slow { SLOW_STEP } else { 1.0 };
        }
        samples.push(StrokeSample::new(x, y, t));
    }

    (samples, joints)
}

/// "L": `right` units along +X, then `up` units along +Y. Joint at `right`.
pub fn l_shape(right: usize, up: usize) -> Vec<StrokeSample> {
    polyline((0.0, 0.0), &[(1.0, 0.0, right), (0.0, 1.0, up)]).0
}

/// "U" turned on its side: right, up, then back left. Joints at `side` and `2 * side`.
pub fn u_shape(side: usize) -> Vec<StrokeSample> {
    polyline(
        (0.0, 0.0),
        &[(1.0, 0.0, side), (0.0, 1.0, side), (-1.0, 0.0, side)],
    )
    .0
}

/// Straight stroke of `n` unit-spaced samples along +X.
pub fn straight(n: usize) -> Vec<StrokeSample> {
    (0..n)
        .map(|i| StrokeSample::new(i as f64, 0.0, i as f64))
        .collect()
}

/// Counter-clockwise arc of `sweep` radians around the origin, `n` samples.
pub fn arc(radius: f64, sweep: f64, n: usize) -> Vec<StrokeSample> {
    (0..n)
        .map(|i| {
            let a = sweep * i as f64 / (n - 1) as f64;
            StrokeSample::new(radius * a.cos(), radius * a.sin(), i as f64)
        })
        .collect()
}

/// Add uniform noise in `[-amplitude, amplitude]` to every coordinate.
pub fn add_noise(samples: &[StrokeSample], amplitude: f64, seed: u64) -> Vec<StrokeSample> {
    let mut rng = StdRng::seed_from_u64(seed);
    samples
        .iter()
        .map(|s| {
            StrokeSample::new(
                s.x + rng.random_range(-amplitude..=amplitude),
                s.y + rng.random_range(-amplitude..=amplitude),
                s.t,
            )
        })
        .collect()
}

/// Random walk of `n` unit steps with a heading that drifts.
pub fn wander(n: usize, seed: u64) -> Vec<StrokeSample> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut heading: f64 = 0.0;
    let (mut x, mut y, mut t) = (0.0, 0.0, 0.0);

    let mut samples = Vec::with_capacity(n);
    for _ in 0..n {
        samples.push(StrokeSample::new(x, y, t));
        heading += rng.random_range(-0.4..=0.4);
        x += heading.cos();
        y += heading.sin();
        t += rng.random_range(0.5..=2.0);
    }
    samples
}

/// Build an annotated sequence with default stroke settings.
pub fn sequence(samples: &[StrokeSample]) -> PointSequence {
    PointSequence::from_samples(samples, &StrokeConfig::default()).unwrap()
}

/// Initialize logging for tests (idempotent).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
