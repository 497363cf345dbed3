//! Ordered stroke point sequences and the [`PointStream`] abstraction.
//!
//! The segmenter never owns the points it works on. It reads positions,
//! derived attributes and path lengths through [`PointStream`], and writes
//! back only the corner flags and the final [`Segmentation`].
//!
//! [`PointSequence`] is the stock implementation. It keeps a cumulative
//! arc-length table so curvilinear distance queries are O(1), and can derive
//! speed and curvature from raw `(x, y, t)` samples.

use serde::{Deserialize, Serialize};

use super::math::turning_angle;
use super::point::{Point2D, StrokePoint, StrokeSample};
use crate::error::{Result, SegmentationError};
use crate::segmentation::Segmentation;

/// Read access to an annotated stroke, plus the two write-backs the
/// segmenter performs.
pub trait PointStream {
    /// Number of points.
    fn len(&self) -> usize;

    /// Whether the stream has no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of point `index`.
    fn position(&self, index: usize) -> Point2D;

    /// Timestamp of point `index`.
    fn time(&self, index: usize) -> f64;

    /// Signed curvature at point `index`.
    fn curvature(&self, index: usize) -> f64;

    /// Pen speed at point `index`.
    fn speed(&self, index: usize) -> f64;

    /// Arc length travelled along the path between two indices (order-insensitive).
    fn curvilinear_distance(&self, from: usize, to: usize) -> f64;

    /// Total path length of the stroke.
    fn total_length(&self) -> f64;

    /// Set or clear the corner flag of point `index`.
    fn set_corner(&mut self, index: usize, is_corner: bool);

    /// Receive the final segmentation. Default ignores it.
    fn attach_segmentation(&mut self, _segmentation: &Segmentation) {}
}

/// Settings for deriving per-point attributes from raw samples.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeConfig {
    /// Euclidean window over which curvature is measured (full width, stroke units).
    /// Default: 24.0
    pub curvature_window: f64,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            curvature_window: 24.0,
        }
    }
}

impl StrokeConfig {
    /// Builder-style setter for curvature window.
    pub fn with_curvature_window(mut self, value: f64) -> Self {
        self.curvature_window = value;
        self
    }
}

/// An ordered, index-addressable stroke with cumulative arc lengths.
#[derive(Clone, Debug, Default)]
pub struct PointSequence {
    points: Vec<StrokePoint>,
    /// `cumulative[i]` is the path length from point 0 to point i.
    cumulative: Vec<f64>,
    segmentation: Option<Segmentation>,
}

impl PointSequence {
    /// Wrap already-annotated points.
    ///
    /// Speed and curvature are taken as given. Fails on non-finite values or
    /// decreasing timestamps.
    pub fn new(points: Vec<StrokePoint>) -> Result<Self> {
        validate_points(&points)?;
        let cumulative = cumulative_lengths(&points);
        Ok(Self {
            points,
            cumulative,
            segmentation: None,
        })
    }

    /// Build a sequence from raw samples and derive speed and curvature.
    pub fn from_samples(samples: &[StrokeSample], config: &StrokeConfig) -> Result<Self> {
        let points = samples
            .iter()
            .map(|s| StrokePoint::new(s.position(), s.t))
            .collect();
        let mut sequence = Self::new(points)?;
        sequence.compute_speed();
        sequence.compute_curvature(config.curvature_window);
        Ok(sequence)
    }

    /// Points in time order.
    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    /// Point at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&StrokePoint> {
        self.points.get(index)
    }

    /// Indices currently flagged as corners.
    pub fn corner_indices(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_corner)
            .map(|(i, _)| i)
            .collect()
    }

    /// Segmentation attached by the last successful run.
    pub fn segmentation(&self) -> Option<&Segmentation> {
        self.segmentation.as_ref()
    }

    /// Recompute per-point speed by central differences.
    ///
    /// Speed at i is the path length between `i-1` and `i+1` (clamped at the
    /// ends) over the time elapsed between them, or 0 when no time elapses.
    pub fn compute_speed(&mut self) {
        let n = self.points.len();
        if n < 2 {
            if let Some(p) = self.points.first_mut() {
                p.speed = 0.0;
            }
            return;
        }

        for i in 0..n {
            let lo = i.saturating_sub(1);
            let hi = (i + 1).min(n - 1);
            let dt = self.points[hi].time - self.points[lo].time;
            let ds = self.cumulative[hi] - self.cumulative[lo];
            self.points[i].speed = if dt > 0.0 { ds / dt } else { 0.0 };
        }
    }

    /// Recompute per-point curvature over a fixed Euclidean window.
    ///
    /// For each point the legs reach back and forward to the nearest points at
    /// least `window / 2` away in straight-line distance (or the stroke ends).
    /// Curvature is the turning angle between the legs over the path length
    /// they span.
    pub fn compute_curvature(&mut self, window: f64) {
        let n = self.points.len();
        let half = window * 0.5;

        let curvatures: Vec<f64> = (0..n)
            .map(|i| {
                let here = self.points[i].position;

                let back = (0..i)
                    .rev()
                    .find(|&j| self.points[j].position.distance(here) >= half)
                    .unwrap_or(0);
                let ahead = (i + 1..n)
                    .find(|&j| self.points[j].position.distance(here) >= half)
                    .unwrap_or(n - 1);

                if back == i || ahead == i {
                    return 0.0;
                }

                let span = self.cumulative[ahead] - self.cumulative[back];
                if span <= f64::EPSILON {
                    return 0.0;
                }

                let d1 = here - self.points[back].position;
                let d2 = self.points[ahead].position - here;
                turning_angle(d1, d2) / span
            })
            .collect();

        for (point, curvature) in self.points.iter_mut().zip(curvatures) {
            point.curvature = curvature;
        }
    }
}

impl PointStream for PointSequence {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn position(&self, index: usize) -> Point2D {
        self.points[index].position
    }

    fn time(&self, index: usize) -> f64 {
        self.points[index].time
    }

    fn curvature(&self, index: usize) -> f64 {
        self.points[index].curvature
    }

    fn speed(&self, index: usize) -> f64 {
        self.points[index].speed
    }

    fn curvilinear_distance(&self, from: usize, to: usize) -> f64 {
        (self.cumulative[to] - self.cumulative[from]).abs()
    }

    fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    fn set_corner(&mut self, index: usize, is_corner: bool) {
        self.points[index].is_corner = is_corner;
    }

    fn attach_segmentation(&mut self, segmentation: &Segmentation) {
        self.segmentation = Some(segmentation.clone());
    }
}

fn validate_points(points: &[StrokePoint]) -> Result<()> {
    for (i, p) in points.iter().enumerate() {
        if !p.position.is_finite() || !p.time.is_finite() {
            return Err(SegmentationError::InvalidInput(format!(
                "point {i} has a non-finite coordinate or timestamp"
            )));
        }
        if !p.speed.is_finite() || !p.curvature.is_finite() {
            return Err(SegmentationError::InvalidInput(format!(
                "point {i} has a non-finite speed or curvature"
            )));
        }
    }

    if let Some(i) = points.windows(2).position(|w| w[1].time < w[0].time) {
        return Err(SegmentationError::InvalidInput(format!(
            "timestamp decreases between points {} and {}",
            i,
            i + 1
        )));
    }

    Ok(())
}

fn cumulative_lengths(points: &[StrokePoint]) -> Vec<f64> {
    let mut cumulative = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += points[i - 1].position.distance(p.position);
        }
        cumulative.push(total);
    }
    cumulative
}
