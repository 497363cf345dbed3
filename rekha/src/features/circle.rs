//! Circular arc model fitted through three stroke samples.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::core::math::{TWO_PI, ccw_sweep};

/// Relative tolerance below which three points are treated as collinear.
const COLLINEAR_TOLERANCE: f64 = 1e-12;

/// A circle in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle2D {
    /// Centre of the circle.
    pub center: Point2D,
    /// Radius (always positive and finite).
    pub radius: f64,
}

impl Circle2D {
    /// Circle through three points, or `None` if they are collinear or coincident.
    ///
    /// # Example
    /// ```
    /// use rekha::core::Point2D;
    /// use rekha::features::Circle2D;
    ///
    /// let c = Circle2D::through(
    ///     Point2D::new(1.0, 0.0),
    ///     Point2D::new(0.0, 1.0),
    ///     Point2D::new(-1.0, 0.0),
    /// ).unwrap();
    /// assert!((c.radius - 1.0).abs() < 1e-12);
    /// ```
    pub fn through(a: Point2D, b: Point2D, c: Point2D) -> Option<Self> {
        // Work relative to `a` for numerical stability
        let ab = b - a;
        let ac = c - a;

        let scale = ab.length_squared().max(ac.length_squared());
        let d = 2.0 * ab.cross(ac);
        if scale <= 0.0 || d.abs() <= COLLINEAR_TOLERANCE * scale {
            return None;
        }

        let ab_sq = ab.length_squared();
        let ac_sq = ac.length_squared();
        let ux = (ac.y * ab_sq - ab.y * ac_sq) / d;
        let uy = (ab.x * ac_sq - ac.x * ab_sq) / d;

        let offset = Point2D::new(ux, uy);
        let radius = offset.length();
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }

        Some(Self {
            center: a + offset,
            radius,
        })
    }

    /// Radial residual of a point: distance to centre minus radius.
    #[inline]
    pub fn residual(&self, point: Point2D) -> f64 {
        point.distance(self.center) - self.radius
    }
}

/// An arc of a circle running from `start` through `via` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleArc {
    /// Supporting circle.
    pub circle: Circle2D,
    /// First point of the arc.
    pub start: Point2D,
    /// A point the arc passes through between start and end.
    pub via: Point2D,
    /// Last point of the arc.
    pub end: Point2D,
}

impl CircleArc {
    /// Arc through three points, or `None` when no circle passes through them.
    pub fn through(start: Point2D, via: Point2D, end: Point2D) -> Option<Self> {
        Circle2D::through(start, via, end).map(|circle| Self {
            circle,
            start,
            via,
            end,
        })
    }

    /// Centre of the supporting circle.
    #[inline]
    pub fn center(&self) -> Point2D {
        self.circle.center
    }

    /// Radius of the supporting circle.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.circle.radius
    }

    /// Whether the arc turns counter-clockwise from start to end.
    pub fn is_ccw(&self) -> bool {
        let (a0, am, a1) = self.angles();
        ccw_sweep(a0, am) <= ccw_sweep(a0, a1)
    }

    /// Unsigned angle swept from start through `via` to end, in [0, 2π).
    pub fn sweep(&self) -> f64 {
        let (a0, _, a1) = self.angles();
        let ccw = ccw_sweep(a0, a1);
        if self.is_ccw() { ccw } else { TWO_PI - ccw }
    }

    /// Length along the arc from start to end.
    #[inline]
    pub fn arc_length(&self) -> f64 {
        self.circle.radius * self.sweep()
    }

    fn angles(&self) -> (f64, f64, f64) {
        let c = self.circle.center;
        (
            (self.start - c).angle(),
            (self.via - c).angle(),
            (self.end - c).angle(),
        )
    }
}
