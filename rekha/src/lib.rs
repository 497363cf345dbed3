//! # Rekha
//!
//! Corner finding and line/arc segmentation for pen strokes.
//!
//! ## Overview
//!
//! A stroke is a time-ordered list of `(x, y, t)` samples. Rekha finds the
//! corners that split it into primitives and classifies each piece:
//!
//! - **Line** - the chord between two corners
//! - **Arc** - a circle through both corners and the stroke between them
//!
//! ## Pipeline
//!
//! - **Candidate detection**: high |curvature| while the pen is slow
//! - **Duplicate collapsing**: nearby candidates keep the sharpest
//! - **Iterative merging**: short segments fold into neighbours while the
//!   merged fit stays good
//!
//! ## Quick Start
//!
//! ```rust
//! use rekha::{PointSequence, Segmenter, StrokeConfig, StrokeSample};
//!
//! // An "L": 100 units right, then 60 up
//! let samples: Vec<_> = (0..=100)
//!     .map(|i| StrokeSample::new(i as f64, 0.0, i as f64))
//!     .chain((1..=60).map(|i| StrokeSample::new(100.0, i as f64, 100.0 + i as f64)))
//!     .collect();
//!
//! let mut stroke = PointSequence::from_samples(&samples, &StrokeConfig::default()).unwrap();
//! let result = Segmenter::default().run(&mut stroke).unwrap();
//!
//! assert_eq!(result.corners.first(), Some(&0));
//! assert_eq!(result.corners.last(), Some(&160));
//! ```
//!
//! ## Coordinate System
//!
//! Any consistent planar units. Distance thresholds (curvature window,
//! duplicate separation) are expressed in the same units as the samples.

#![warn(missing_docs)]

// Core types
pub mod core;

// Geometric primitives
pub mod features;

// Corner finding pipeline
pub mod segmentation;

// YAML configuration
pub mod config;

// Error types
pub mod error;

// Re-export commonly used types
pub use crate::core::{Point2D, PointSequence, PointStream, StrokeConfig, StrokePoint, StrokeSample};
pub use features::{Circle2D, CircleArc, Line2D};

pub use segmentation::{
    CancellationToken, FittedModel, Segment, SegmentKind, Segmentation, SegmentationEvent,
    SegmentationObserver, Segmenter, SegmenterConfig, find_corners, segment,
};

pub use config::{ConfigLoadError, RekhaConfig};
pub use error::{Result, SegmentationError};
