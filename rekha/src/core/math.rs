//! Mathematical utilities for angles and robust statistics.
//!
//! All angles are in radians, counter-clockwise positive.

use std::f64::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f64 = 2.0 * PI;

/// Counter-clockwise sweep from `from` to `to`, in [0, 2π).
#[inline]
pub fn ccw_sweep(from: f64, to: f64) -> f64 {
    (to - from).rem_euclid(TWO_PI)
}

/// Signed turning angle from direction `d1` to direction `d2`, in (-π, π].
///
/// Returns 0 when either direction is degenerate.
#[inline]
pub fn turning_angle(d1: super::Point2D, d2: super::Point2D) -> f64 {
    if d1.length_squared() <= f64::EPSILON || d2.length_squared() <= f64::EPSILON {
        return 0.0;
    }
    d1.cross(d2).atan2(d1.dot(d2))
}

/// Median of a set of values.
///
/// Even-length inputs average the two middle values. NaNs sort last.
/// Returns `None` for an empty slice.
///
/// # Example
/// ```
/// use rekha::core::math::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// assert_eq!(median(&[]), None);
/// ```
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) * 0.5)
    } else {
        Some(sorted[mid])
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
