//! Progress reporting and cooperative cancellation.
//!
//! The segmenter reports each pipeline step to a [`SegmentationObserver`].
//! Observers only see shared references, so they can draw or log the
//! intermediate state but never change it. [`CancellationToken`] lets another
//! thread stop a long merge loop between passes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use super::candidates::CandidateSet;

/// Which neighbour a short segment was merged into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeSide {
    /// Merged with the previous segment; its start corner was dropped.
    Left,
    /// Merged with the next segment; its end corner was dropped.
    Right,
}

/// A step of the segmentation pipeline.
#[derive(Clone, Copy, Debug)]
pub enum SegmentationEvent<'a> {
    /// Candidate detection finished.
    CandidatesDetected {
        /// Detected candidates, endpoints included.
        candidates: &'a CandidateSet,
    },
    /// A candidate was dropped for being too close to a neighbour.
    DuplicateRemoved {
        /// Dropped index.
        removed: usize,
        /// Neighbour that survived.
        kept: usize,
        /// Candidates after the removal.
        candidates: &'a CandidateSet,
    },
    /// A short segment was merged into a neighbour.
    Merged {
        /// Direction of the merge.
        side: MergeSide,
        /// Corner index dropped by the merge.
        removed: usize,
        /// Iteration number at the time of the merge.
        iteration: u32,
        /// Length threshold the segment fell under.
        threshold: f64,
        /// Candidates after the merge.
        candidates: &'a CandidateSet,
    },
    /// No segment could be merged, so the threshold grows.
    ThresholdRelaxed {
        /// New iteration number.
        iteration: u32,
        /// Segment count at the time of relaxation.
        segment_count: usize,
    },
    /// Merging converged.
    Finished {
        /// Final corners.
        corners: &'a CandidateSet,
        /// Merge-loop passes performed.
        passes: usize,
    },
}

/// Receiver of pipeline progress.
pub trait SegmentationObserver {
    /// Called synchronously for every event. Default ignores it.
    fn on_event(&mut self, _event: &SegmentationEvent<'_>) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SegmentationObserver for NoopObserver {}

/// Owned copy of a [`SegmentationEvent`], without the candidate snapshots.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventRecord {
    /// See [`SegmentationEvent::CandidatesDetected`].
    CandidatesDetected {
        /// Detected candidate indices.
        candidates: Vec<usize>,
    },
    /// See [`SegmentationEvent::DuplicateRemoved`].
    DuplicateRemoved {
        /// Dropped index.
        removed: usize,
        /// Surviving neighbour.
        kept: usize,
    },
    /// See [`SegmentationEvent::Merged`].
    Merged {
        /// Direction of the merge.
        side: MergeSide,
        /// Dropped corner index.
        removed: usize,
        /// Iteration number.
        iteration: u32,
    },
    /// See [`SegmentationEvent::ThresholdRelaxed`].
    ThresholdRelaxed {
        /// New iteration number.
        iteration: u32,
        /// Segment count at relaxation.
        segment_count: usize,
    },
    /// See [`SegmentationEvent::Finished`].
    Finished {
        /// Final corner indices.
        corners: Vec<usize>,
        /// Merge-loop passes.
        passes: usize,
    },
}

impl From<&SegmentationEvent<'_>> for EventRecord {
    fn from(event: &SegmentationEvent<'_>) -> Self {
        match *event {
            SegmentationEvent::CandidatesDetected { candidates } => Self::CandidatesDetected {
                candidates: candidates.to_vec(),
            },
            SegmentationEvent::DuplicateRemoved { removed, kept, .. } => {
                Self::DuplicateRemoved { removed, kept }
            }
            SegmentationEvent::Merged {
                side,
                removed,
                iteration,
                ..
            } => Self::Merged {
                side,
                removed,
                iteration,
            },
            SegmentationEvent::ThresholdRelaxed {
                iteration,
                segment_count,
            } => Self::ThresholdRelaxed {
                iteration,
                segment_count,
            },
            SegmentationEvent::Finished { corners, passes } => Self::Finished {
                corners: corners.to_vec(),
                passes,
            },
        }
    }
}

/// Observer that keeps every event in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    /// Recorded events, oldest first.
    pub events: Vec<EventRecord>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of merges recorded.
    pub fn merge_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, EventRecord::Merged { .. }))
            .count()
    }
}

impl SegmentationObserver for EventLog {
    fn on_event(&mut self, event: &SegmentationEvent<'_>) {
        self.events.push(EventRecord::from(event));
    }
}

/// Shared flag that asks a running segmentation to stop.
///
/// Clones share the same flag. The merge loop checks it once per pass.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_shared_between_clones() {
        let token = CancellationToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());

        token.cancel();
        assert!(other.is_cancelled());
    }

    #[test]
    fn test_cancel_from_another_thread() {
        let token = CancellationToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_event_log_records_owned_copies() {
        let set = CandidateSet::from_indices([4, 7], 10).unwrap();
        let mut log = EventLog::new();

        log.on_event(&SegmentationEvent::CandidatesDetected { candidates: &set });
        log.on_event(&SegmentationEvent::Merged {
            side: MergeSide::Right,
            removed: 7,
            iteration: 2,
            threshold: 3.0,
            candidates: &set,
        });
        log.on_event(&SegmentationEvent::Finished {
            corners: &set,
            passes: 5,
        });

        assert_eq!(log.merge_count(), 1);
        assert_eq!(
            log.events[0],
            EventRecord::CandidatesDetected {
                candidates: vec![0, 4, 7, 9]
            }
        );
        assert_eq!(
            log.events[2],
            EventRecord::Finished {
                corners: vec![0, 4, 7, 9],
                passes: 5
            }
        );
    }

    #[test]
    fn test_noop_observer_accepts_events() {
        let set = CandidateSet::endpoints(2).unwrap();
        NoopObserver.on_event(&SegmentationEvent::Finished {
            corners: &set,
            passes: 0,
        });
    }
}
