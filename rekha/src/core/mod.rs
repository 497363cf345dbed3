//! Core types for the rekha stroke segmentation library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`Point2D`]: 2D coordinate with vector helpers
//! - [`StrokeSample`] and [`StrokePoint`]: raw and annotated stroke points
//! - [`PointStream`] and [`PointSequence`]: the ordered stroke the segmenter reads
//! - [`math`]: angle and statistics helpers

pub mod math;
mod point;
mod sequence;

pub use point::{Point2D, StrokePoint, StrokeSample};
pub use sequence::{PointSequence, PointStream, StrokeConfig};
