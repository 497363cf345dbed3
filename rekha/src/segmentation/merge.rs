//! Iterative merging of short segments into their neighbours.
//!
//! Each pass rebuilds the segments between consecutive candidates and computes
//! a length threshold of `mean segment length × iteration`. The first segment
//! under the threshold that can be absorbed by a neighbour without hurting the
//! fit loses one of its corners and the pass restarts at the same iteration.
//! When nothing merges the iteration number grows, and once the threshold
//! exceeds the longest segment the corners are final.
//!
//! # Acceptance
//!
//! For segment `this` with neighbours `prev` / `next`:
//!
//! ```text
//! left  = fit(prev.start .. this.end)
//! right = fit(this.start .. next.end)
//! merge left  iff left.error < right.error
//!             and (left is a line or left.error < slack·prev.error + this.error)
//! ```
//!
//! "Is a line" means classified as one by default. With
//! [`LineShortcut::ProbablyLine`] it must also pass the straightness test.
//!
//! A missing neighbour contributes error 0 and its merge scores +∞. Equal
//! finite errors go to the [`TieBreak`] policy.

use super::candidates::CandidateSet;
use super::config::{FitConfig, LineShortcut, MergeConfig, MergeScanOrder, TieBreak};
use super::observer::{CancellationToken, MergeSide, SegmentationEvent, SegmentationObserver};
use super::segment::{Segment, SegmentKind};
use crate::core::PointStream;
use crate::error::{Result, SegmentationError};

/// Final state of the merge loop.
#[derive(Clone, Debug)]
pub struct MergeOutcome {
    /// Surviving corners.
    pub candidates: CandidateSet,
    /// Segments between the surviving corners, in stroke order.
    pub segments: Vec<Segment>,
    /// Loop passes performed (merges plus relaxations plus the final check).
    pub passes: usize,
    /// Corners removed by merging.
    pub merges: usize,
    /// Iteration number the loop stopped at.
    pub iteration: u32,
}

/// Fit a segment between each pair of consecutive candidates.
pub fn fit_segments<S>(stream: &S, candidates: &CandidateSet, config: &FitConfig) -> Vec<Segment>
where
    S: PointStream + ?Sized,
{
    candidates
        .bounds()
        .map(|(start, end)| Segment::fit(stream, start, end, config))
        .collect()
}

/// Merge short segments until every segment is long enough.
///
/// # Errors
/// - `InvalidInput` if the stroke has zero path length
/// - `ResourceExhausted` after `config.max_iterations` passes
/// - `Cancelled` when `cancel` is set between passes
pub fn merge_candidates<S>(
    stream: &S,
    mut candidates: CandidateSet,
    fit: &FitConfig,
    config: &MergeConfig,
    observer: &mut dyn SegmentationObserver,
    cancel: Option<&CancellationToken>,
) -> Result<MergeOutcome>
where
    S: PointStream + ?Sized,
{
    let total_length = stream.total_length();
    if total_length <= 0.0 {
        return Err(SegmentationError::InvalidInput(
            "stroke has zero path length".to_string(),
        ));
    }

    let mut iteration = config.initial_iteration.max(1);
    let mut passes = 0usize;
    let mut merges = 0usize;

    loop {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            log::debug!("Merge cancelled after {} passes", passes);
            return Err(SegmentationError::Cancelled { passes });
        }
        if passes >= config.max_iterations {
            log::warn!(
                "Merge gave up after {} passes with {} corners at iteration {}",
                passes,
                candidates.len(),
                iteration
            );
            return Err(SegmentationError::ResourceExhausted {
                limit: config.max_iterations,
            });
        }
        passes += 1;

        let segments = fit_segments(stream, &candidates, fit);
        let threshold = total_length / segments.len() as f64 * f64::from(iteration);
        let longest = segments.iter().map(Segment::length).fold(0.0, f64::max);

        if threshold > longest {
            log::debug!(
                "Merge converged: {} corners, {} merges, {} passes, iteration {}",
                candidates.len(),
                merges,
                passes,
                iteration
            );
            observer.on_event(&SegmentationEvent::Finished {
                corners: &candidates,
                passes,
            });
            return Ok(MergeOutcome {
                candidates,
                segments,
                passes,
                merges,
                iteration,
            });
        }

        let merge = scan_order(&segments, config.scan_order)
            .into_iter()
            .filter(|&k| segments[k].length() < threshold)
            .find_map(|k| choose_merge(stream, &segments, k, fit, config));

        match merge {
            // Only interior corners are ever chosen, so the removal succeeds
            Some((side, removed)) if candidates.remove(removed) => {
                merges += 1;
                log::debug!(
                    "Merged {:?} at corner {} (iteration {}, threshold {:.3}, {} corners left)",
                    side,
                    removed,
                    iteration,
                    threshold,
                    candidates.len()
                );
                observer.on_event(&SegmentationEvent::Merged {
                    side,
                    removed,
                    iteration,
                    threshold,
                    candidates: &candidates,
                });
            }
            _ => {
                iteration = iteration.saturating_add(1);
                log::debug!(
                    "No merge below threshold {:.3}; iteration now {}",
                    threshold,
                    iteration
                );
                observer.on_event(&SegmentationEvent::ThresholdRelaxed {
                    iteration,
                    segment_count: segments.len(),
                });
            }
        }
    }
}

/// Segment positions in the order they are examined.
fn scan_order(segments: &[Segment], order: MergeScanOrder) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..segments.len()).collect();
    if order == MergeScanOrder::ShortestFirst {
        positions.sort_by(|&a, &b| segments[a].length().total_cmp(&segments[b].length()));
    }
    positions
}

/// Decide whether segment `k` merges, and which corner goes.
fn choose_merge<S>(
    stream: &S,
    segments: &[Segment],
    k: usize,
    fit: &FitConfig,
    config: &MergeConfig,
) -> Option<(MergeSide, usize)>
where
    S: PointStream + ?Sized,
{
    let this = &segments[k];
    let prev = k.checked_sub(1).map(|j| &segments[j]);
    let next = segments.get(k + 1);

    let left = prev.map(|p| Segment::fit(stream, p.start, this.end, fit));
    let right = next.map(|n| Segment::fit(stream, this.start, n.end, fit));

    let left_error = left.as_ref().map_or(f64::INFINITY, Segment::error);
    let right_error = right.as_ref().map_or(f64::INFINITY, Segment::error);

    let acceptable = |merged: Option<&Segment>, neighbour: Option<&Segment>| {
        let neighbour_error = neighbour.map_or(0.0, Segment::error);
        merged.is_some_and(|m| {
            let line = match config.line_shortcut {
                LineShortcut::ClassifiedLine => m.kind == SegmentKind::Line,
                LineShortcut::ProbablyLine => m.probably_line,
            };
            line || m.error() < config.error_slack * neighbour_error + this.error()
        })
    };
    let left_ok = acceptable(left.as_ref(), prev);
    let right_ok = acceptable(right.as_ref(), next);

    let go_left = Some((MergeSide::Left, this.start));
    let go_right = Some((MergeSide::Right, this.end));

    let decision = if left_error < right_error {
        if left_ok { go_left } else { None }
    } else if right_error < left_error {
        if right_ok { go_right } else { None }
    } else if left_error.is_finite() {
        match config.tie_break {
            TieBreak::PreferLeft if left_ok => go_left,
            TieBreak::PreferLeft if right_ok => go_right,
            TieBreak::PreferRight if right_ok => go_right,
            TieBreak::PreferRight if left_ok => go_left,
            _ => None,
        }
    } else {
        None
    };

    log::trace!(
        "Segment [{}, {}] len {:.3}: left {:.4} ({}), right {:.4} ({}) -> {:?}",
        this.start,
        this.end,
        this.length(),
        left_error,
        left_ok,
        right_error,
        right_ok,
        decision.map(|(side, _)| side)
    );

    decision
}
