//! Point and sample types for pen strokes.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// 2D point in stroke coordinates (digitizer units, typically pixels).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point2D {
    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: Point2D) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Length (magnitude) of this point as a vector from origin
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length as a vector
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Angle of this vector from +X (radians, CCW positive)
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Dot product with another point (as vectors)
    #[inline]
    pub fn dot(&self, other: Point2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (z-component of 3D cross product)
    #[inline]
    pub fn cross(&self, other: Point2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}

/// A raw digitizer sample: position plus timestamp.
///
/// This is the wire shape accepted by [`PointSequence::from_samples`](super::PointSequence::from_samples)
/// and by the `segment_stroke` example.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeSample {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Timestamp (any monotonic unit, typically milliseconds)
    pub t: f64,
}

impl StrokeSample {
    /// Create a new sample
    #[inline]
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t }
    }

    /// Position of this sample
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// A stroke point annotated with derived kinematic and shape attributes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    /// Position
    pub position: Point2D,
    /// Timestamp
    pub time: f64,
    /// Local pen speed (distance per time unit)
    pub speed: f64,
    /// Signed curvature (radians per distance unit)
    pub curvature: f64,
    /// Set by the segmenter on surviving corner indices
    pub is_corner: bool,
}

impl StrokePoint {
    /// Create a point with no derived attributes yet.
    pub fn new(position: Point2D, time: f64) -> Self {
        Self {
            position,
            time,
            speed: 0.0,
            curvature: 0.0,
            is_corner: false,
        }
    }

    /// Create a point with speed and curvature already known.
    pub fn annotated(position: Point2D, time: f64, speed: f64, curvature: f64) -> Self {
        Self {
            position,
            time,
            speed,
            curvature,
            is_corner: false,
        }
    }
}
