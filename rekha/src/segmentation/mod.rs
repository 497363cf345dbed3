//! Corner finding and stroke segmentation.
//!
//! The pipeline runs in three stages:
//!
//! 1. [`detect_candidates`]: points that turn hard while the pen slows down
//! 2. [`collapse_duplicates`]: candidates too close along the path keep only
//!    the sharper one
//! 3. [`merge_candidates`]: short segments are absorbed by a neighbour while
//!    the merged fit stays good, with a length threshold that grows each
//!    time nothing merges
//!
//! Each stretch between surviving corners is then a [`Segment`], classified
//! as a line or a circular arc.
//!
//! [`Segmenter`] wires the stages together, validates its
//! [`SegmenterConfig`], honours a [`CancellationToken`] and reports progress
//! to a [`SegmentationObserver`]. [`find_corners`] and [`segment`] run it
//! with default settings.

mod candidates;
mod config;
mod duplicates;
mod merge;
mod observer;
mod segment;
mod segmenter;

pub use candidates::{CandidateReport, CandidateSet, detect_candidates};
pub use config::{
    CandidateConfig, DuplicateConfig, FitConfig, LineShortcut, MergeConfig, MergeScanOrder,
    SegmenterConfig, SpeedBaseline, TieBreak,
};
pub use duplicates::collapse_duplicates;
pub use merge::{MergeOutcome, fit_segments, merge_candidates};
pub use observer::{
    CancellationToken, EventLog, EventRecord, MergeSide, NoopObserver, SegmentationEvent,
    SegmentationObserver,
};
pub use segment::{FittedModel, Segment, SegmentKind};
pub use segmenter::{Segmentation, Segmenter, find_corners, segment};
