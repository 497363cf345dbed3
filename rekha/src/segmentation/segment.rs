//! Per-interval line/arc fitting and error scoring.
//!
//! A [`Segment`] is the model of the stroke between two candidate corners.
//! Both models are always fitted; the segment then picks one:
//!
//! - **Line**: the chord between the endpoints. No refit.
//! - **Arc**: of all circles through `(start, i, end)` for interior `i`, the
//!   one with the median radius.
//!
//! Errors are sums of squared residuals over every sample in `[start, end]`,
//! normalized by `end - start`. Anything that cannot be fitted scores
//! `f64::INFINITY`, which drops it out of every comparison.

use serde::{Deserialize, Serialize};

use super::config::FitConfig;
use crate::core::PointStream;
use crate::features::{CircleArc, Line2D};

/// Primitive a segment is classified as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Straight line (chord)
    Line,
    /// Circular arc
    Arc,
}

/// The fitted model of the chosen kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FittedModel {
    /// Chord between the segment endpoints
    Line(Line2D),
    /// Median-radius arc through the endpoints
    Arc(CircleArc),
}

/// Model of the stroke between two sample indices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First sample index.
    pub start: usize,
    /// Last sample index (shared with the next segment).
    pub end: usize,
    /// Chosen primitive.
    pub kind: SegmentKind,
    /// Line model.
    pub chord: Line2D,
    /// Arc model, if a valid median circle exists.
    pub arc: Option<CircleArc>,
    /// Line model error.
    pub line_error: f64,
    /// Arc model error.
    pub arc_error: f64,
    /// Path length between the endpoints.
    pub path_length: f64,
    /// Chord length / path length.
    pub straightness: f64,
    /// Whether `straightness` passed the probably-line ratio.
    pub probably_line: bool,
}

impl Segment {
    /// Fit both models over `[start, end]` and classify.
    ///
    /// A segment straighter than `config.probably_line_ratio` is a line
    /// regardless of the errors. Otherwise the lower error wins, ties to line.
    pub fn fit<S>(stream: &S, start: usize, end: usize, config: &FitConfig) -> Self
    where
        S: PointStream + ?Sized,
    {
        let chord = Line2D::new(stream.position(start), stream.position(end));
        let path_length = if end > start {
            stream.curvilinear_distance(start, end)
        } else {
            0.0
        };

        let straightness = if path_length > f64::EPSILON {
            chord.length() / path_length
        } else {
            1.0
        };
        let probably_line = straightness > config.probably_line_ratio;

        let line_error = line_error(stream, start, end, &chord);
        let arc = median_radius_arc(stream, start, end);
        let arc_error = arc.map_or(f64::INFINITY, |a| arc_error(stream, start, end, &a));

        let kind = if probably_line || line_error <= arc_error {
            SegmentKind::Line
        } else {
            SegmentKind::Arc
        };

        Self {
            start,
            end,
            kind,
            chord,
            arc,
            line_error,
            arc_error,
            path_length,
            straightness,
            probably_line,
        }
    }

    /// Error of the chosen model.
    #[inline]
    pub fn error(&self) -> f64 {
        match self.kind {
            SegmentKind::Line => self.line_error,
            SegmentKind::Arc => self.arc_error,
        }
    }

    /// Length of the chosen model: chord length for lines, arc length for arcs.
    pub fn length(&self) -> f64 {
        match self.kind {
            SegmentKind::Line => self.chord.length(),
            SegmentKind::Arc => self.arc.map_or(f64::INFINITY, |a| a.arc_length()),
        }
    }

    /// The chosen model.
    pub fn model(&self) -> FittedModel {
        match (self.kind, self.arc) {
            (SegmentKind::Arc, Some(arc)) => FittedModel::Arc(arc),
            _ => FittedModel::Line(self.chord),
        }
    }

    /// Number of samples covered, endpoints included.
    pub fn sample_count(&self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }
}

fn line_error<S>(stream: &S, start: usize, end: usize, chord: &Line2D) -> f64
where
    S: PointStream + ?Sized,
{
    if end <= start {
        return f64::INFINITY;
    }
    let sum = chord.squared_error_sum((start..=end).map(|i| stream.position(i)));
    sum / (end - start) as f64
}

fn arc_error<S>(stream: &S, start: usize, end: usize, arc: &CircleArc) -> f64
where
    S: PointStream + ?Sized,
{
    if end <= start {
        return f64::INFINITY;
    }
    let sum: f64 = (start..=end)
        .map(|i| {
            let d = arc.circle.residual(stream.position(i));
            d * d
        })
        .sum();
    sum / (end - start) as f64
}

/// Circle through the endpoints and each interior sample; pick the median radius.
///
/// Triples with no circle count as infinite radius, so a mostly collinear
/// interval lands on an invalid median and reports no arc.
fn median_radius_arc<S>(stream: &S, start: usize, end: usize) -> Option<CircleArc>
where
    S: PointStream + ?Sized,
{
    if end < start + 2 {
        return None;
    }

    let a = stream.position(start);
    let b = stream.position(end);

    let mut fits: Vec<Option<CircleArc>> = (start + 1..end)
        .map(|i| CircleArc::through(a, stream.position(i), b))
        .collect();
    fits.sort_by(|x, y| {
        let rx = x.map_or(f64::INFINITY, |c| c.radius());
        let ry = y.map_or(f64::INFINITY, |c| c.radius());
        rx.total_cmp(&ry)
    });

    fits[fits.len() / 2]
}
