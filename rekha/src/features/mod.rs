//! Geometric primitives a stroke segment can be modelled as.
//!
//! - [`Line2D`]: chord between the segment endpoints
//! - [`Circle2D`] / [`CircleArc`]: circle through the endpoints and one interior sample

mod circle;
mod line;

pub use circle::{Circle2D, CircleArc};
pub use line::Line2D;
