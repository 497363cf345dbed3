//! Line segment type using endpoint representation.
//!
//! The line model of a stroke segment is the chord between its first and last
//! samples. No least-squares refit is done: the chord is what the merge
//! engine scores.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// A 2D line segment defined by its endpoints.
///
/// # Point-to-Line Distance
///
/// Uses cross product formula (no trig functions):
/// ```text
/// distance = |cross(p - start, direction)| / |direction|
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Line2D {
    /// Start point of the line segment.
    pub start: Point2D,
    /// End point of the line segment.
    pub end: Point2D,
}

impl Line2D {
    /// Create a new line segment from two points.
    #[inline]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    /// Length of the line segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Whether start and end coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction().length_squared() < f64::EPSILON
    }

    /// Perpendicular distance from a point to the infinite line.
    ///
    /// A degenerate line falls back to the distance from its start point.
    #[inline]
    pub fn distance_to_point(&self, point: Point2D) -> f64 {
        if self.is_degenerate() {
            return point.distance(self.start);
        }
        (point - self.start).cross(self.direction()).abs() / self.length()
    }

    /// Sum of squared perpendicular distances from `points` to this line.
    pub fn squared_error_sum<I>(&self, points: I) -> f64
    where
        I: IntoIterator<Item = Point2D>,
    {
        points
            .into_iter()
            .map(|p| {
                let d = self.distance_to_point(p);
                d * d
            })
            .sum()
    }
}
