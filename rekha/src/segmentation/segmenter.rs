//! The corner-finding pipeline as a single call.

use serde::{Deserialize, Serialize};

use super::candidates::detect_candidates;
use super::config::SegmenterConfig;
use super::duplicates::collapse_duplicates;
use super::merge::merge_candidates;
use super::observer::{CancellationToken, NoopObserver, SegmentationEvent, SegmentationObserver};
use super::segment::Segment;
use crate::core::PointStream;
use crate::error::{Result, SegmentationError};

/// Result of a successful run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Corner indices, ascending, first and last sample included.
    pub corners: Vec<usize>,
    /// One segment per pair of consecutive corners.
    pub segments: Vec<Segment>,
    /// Merge-loop passes performed.
    pub passes: usize,
    /// Corners removed by merging.
    pub merges: usize,
    /// Iteration number the merge stopped at.
    pub iteration: u32,
}

/// Runs candidate detection, duplicate collapsing and merging over a stroke.
///
/// On success the stream's corner flags match the returned corners and the
/// [`Segmentation`] is attached to it. On failure the stream is left as it was.
///
/// # Example
/// ```
/// use rekha::core::{PointSequence, StrokeConfig, StrokeSample};
/// use rekha::segmentation::Segmenter;
///
/// let samples: Vec<_> = (0..=50)
///     .map(|i| StrokeSample::new(i as f64, 0.0, i as f64))
///     .collect();
/// let mut stroke = PointSequence::from_samples(&samples, &StrokeConfig::default()).unwrap();
///
/// let result = Segmenter::default().run(&mut stroke).unwrap();
/// assert_eq!(result.corners, vec![0, 50]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Segmenter {
    config: SegmenterConfig,
    cancel: Option<CancellationToken>,
}

impl Segmenter {
    /// Create a segmenter with the given configuration.
    pub fn new(config: SegmenterConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Attach a token checked between merge passes.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segment `stream` without observing progress.
    pub fn run<S>(&self, stream: &mut S) -> Result<Segmentation>
    where
        S: PointStream + ?Sized,
    {
        self.run_observed(stream, &mut NoopObserver)
    }

    /// Segment `stream`, reporting each step to `observer`.
    ///
    /// # Errors
    /// - `InvalidConfig` if the configuration fails validation
    /// - `InvalidInput` for fewer than 2 points or zero path length
    /// - `ResourceExhausted` / `Cancelled` from the merge loop
    pub fn run_observed<S>(
        &self,
        stream: &mut S,
        observer: &mut dyn SegmentationObserver,
    ) -> Result<Segmentation>
    where
        S: PointStream + ?Sized,
    {
        self.config.validate()?;

        let n = stream.len();
        if n < 2 {
            return Err(SegmentationError::InvalidInput(format!(
                "a stroke needs at least 2 points, got {n}"
            )));
        }
        if stream.total_length() <= 0.0 {
            return Err(SegmentationError::InvalidInput(
                "stroke has zero path length".to_string(),
            ));
        }
        if self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled) {
            return Err(SegmentationError::Cancelled { passes: 0 });
        }

        let report = detect_candidates(&*stream, &self.config.candidates)?;
        observer.on_event(&SegmentationEvent::CandidatesDetected {
            candidates: &report.candidates,
        });

        let candidates =
            collapse_duplicates(&*stream, report.candidates, &self.config.duplicates, observer);
        log::debug!("{} candidates after collapsing duplicates", candidates.len());

        let outcome = merge_candidates(
            &*stream,
            candidates,
            &self.config.fitting,
            &self.config.merge,
            observer,
            self.cancel.as_ref(),
        )?;

        for i in 0..n {
            stream.set_corner(i, false);
        }
        for &i in outcome.candidates.as_slice() {
            stream.set_corner(i, true);
        }

        let segmentation = Segmentation {
            corners: outcome.candidates.to_vec(),
            segments: outcome.segments,
            passes: outcome.passes,
            merges: outcome.merges,
            iteration: outcome.iteration,
        };
        stream.attach_segmentation(&segmentation);

        log::debug!(
            "Segmented {} points into {} segments",
            n,
            segmentation.segments.len()
        );
        Ok(segmentation)
    }
}

/// Corner indices of `stream` with default settings.
///
/// The first and last index are always corners. Corner flags on the stream
/// are updated to match.
pub fn find_corners<S>(stream: &mut S) -> Result<Vec<usize>>
where
    S: PointStream + ?Sized,
{
    Segmenter::default().run(stream).map(|s| s.corners)
}

/// Classified segments of `stream` with default settings.
pub fn segment<S>(stream: &mut S) -> Result<Vec<Segment>>
where
    S: PointStream + ?Sized,
{
    Segmenter::default().run(stream).map(|s| s.segments)
}
