//! Shape integration tests for rekha.
//!
//! These tests segment synthetic strokes with known corners and check the
//! corners and primitives that come back.

mod common;

use approx::assert_relative_eq;
use rekha::segmentation::{
    CandidateSet, EventLog, EventRecord, FitConfig, MergeConfig, MergeSide, SegmenterConfig,
    merge_candidates,
};
use rekha::{FittedModel, SegmentKind, SegmentationError, Segmenter, find_corners, segment};
use std::f64::consts::PI;

// ============================================================================
// Polylines
// ============================================================================

#[test]
fn test_l_shape_finds_joint() {
    common::init_logging();
    let mut stroke = common::sequence(&common::l_shape(100, 60));

    let result = Segmenter::default().run(&mut stroke).unwrap();

    assert_eq!(result.corners, vec![0, 100, 160]);
    assert_eq!(result.segments.len(), 2);
    assert!(result.segments.iter().all(|s| s.kind == SegmentKind::Line));
    assert_eq!(result.merges, 0);
    assert_eq!(stroke.corner_indices(), vec![0, 100, 160]);
}

#[test]
fn test_symmetric_l_shape() {
    let mut stroke = common::sequence(&common::l_shape(100, 100));
    assert_eq!(find_corners(&mut stroke).unwrap(), vec![0, 100, 200]);
}

#[test]
fn test_u_shape_finds_both_joints() {
    let mut stroke = common::sequence(&common::u_shape(100));
    let segments = segment(&mut stroke).unwrap();

    let bounds: Vec<_> = segments.iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(bounds, vec![(0, 100), (100, 200), (200, 300)]);
    for s in &segments {
        assert_eq!(s.kind, SegmentKind::Line);
        assert_relative_eq!(s.error(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(s.length(), 100.0, epsilon = 1e-9);
    }
}

#[test]
fn test_l_shape_leg_corners_merge_away() {
    let stroke = common::sequence(&common::l_shape(100, 60));
    let seeded = CandidateSet::from_indices([30, 100, 130], 161).unwrap();
    let mut log = EventLog::new();

    let out = merge_candidates(
        &stroke,
        seeded,
        &FitConfig::default(),
        &MergeConfig::default(),
        &mut log,
        None,
    )
    .unwrap();

    // Both leg corners fold into straight neighbours; folding the joint would bend a line
    assert_eq!(out.candidates.as_slice(), &[0, 100, 160]);
    assert_eq!(out.merges, 2);
    let merged: Vec<_> = log
        .events
        .iter()
        .filter_map(|e| match e {
            EventRecord::Merged { side, removed, .. } => Some((*side, *removed)),
            _ => None,
        })
        .collect();
    assert_eq!(merged, vec![(MergeSide::Right, 30), (MergeSide::Right, 130)]);

    let whole = rekha::Segment::fit(&stroke, 0, 160, &FitConfig::default());
    assert_eq!(whole.kind, SegmentKind::Arc);
    assert!(out.segments.iter().all(|s| s.kind == SegmentKind::Line));
}

#[test]
fn test_noisy_l_shape_corner_near_joint() {
    let samples = common::add_noise(&common::l_shape(100, 60), 0.15, 7);
    let mut stroke = common::sequence(&samples);

    let corners = find_corners(&mut stroke).unwrap();

    assert_eq!(corners.len(), 3, "corners: {:?}", corners);
    assert_eq!(corners[0], 0);
    assert_eq!(corners[2], 160);
    assert!(corners[1].abs_diff(100) <= 5, "joint at {}", corners[1]);
}

// ============================================================================
// Single primitives
// ============================================================================

#[test]
fn test_straight_stroke_is_one_line() {
    let mut stroke = common::sequence(&common::straight(120));
    let segments = segment(&mut stroke).unwrap();

    assert_eq!(segments.len(), 1);
    let line = &segments[0];
    assert_eq!((line.start, line.end), (0, 119));
    assert_eq!(line.kind, SegmentKind::Line);
    assert!(line.straightness > 0.90);
    assert_relative_eq!(line.error(), 0.0, epsilon = 1e-12);
    assert!(matches!(line.model(), FittedModel::Line(_)));
}

#[test]
fn test_half_circle_is_one_arc() {
    let mut stroke = common::sequence(&common::arc(50.0, PI, 81));
    let segments = segment(&mut stroke).unwrap();

    assert_eq!(segments.len(), 1);
    let seg = &segments[0];
    assert_eq!(seg.kind, SegmentKind::Arc);
    assert_relative_eq!(seg.straightness, 0.637, epsilon = 1e-3);
    assert!(seg.error() < 1e-9);

    let FittedModel::Arc(arc) = seg.model() else {
        panic!("expected an arc, got {:?}", seg.model());
    };
    assert_relative_eq!(arc.center().x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(arc.center().y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(arc.radius(), 50.0, epsilon = 1e-6);
    assert!(arc.is_ccw());
}

#[test]
fn test_two_point_stroke() {
    let mut stroke = common::sequence(&[
        rekha::StrokeSample::new(0.0, 0.0, 0.0),
        rekha::StrokeSample::new(10.0, 0.0, 1.0),
    ]);

    let result = Segmenter::default().run(&mut stroke).unwrap();
    assert_eq!(result.corners, vec![0, 1]);
    assert_eq!(result.segments.len(), 1);
    assert_eq!(result.segments[0].kind, SegmentKind::Line);
}

// ============================================================================
// Budget and observation
// ============================================================================

#[test]
fn test_l_shape_budget_exhausted() {
    let config = SegmenterConfig {
        merge: MergeConfig::default().with_max_iterations(1),
        ..SegmenterConfig::default()
    };
    let mut stroke = common::sequence(&common::l_shape(100, 60));

    let err = Segmenter::new(config).run(&mut stroke).unwrap_err();
    assert_eq!(err, SegmentationError::ResourceExhausted { limit: 1 });
    assert!(stroke.corner_indices().is_empty());
    assert!(stroke.segmentation().is_none());
}

#[test]
fn test_l_shape_event_sequence() {
    let mut stroke = common::sequence(&common::l_shape(100, 60));
    let mut log = EventLog::new();
    Segmenter::default().run_observed(&mut stroke, &mut log).unwrap();

    // Slow samples 94..=105 all turn, then collapse onto the joint
    let EventRecord::CandidatesDetected { candidates } = &log.events[0] else {
        panic!("first event was {:?}", log.events[0]);
    };
    let expected: Vec<usize> = std::iter::once(0).chain(94..=105).chain([160]).collect();
    assert_eq!(candidates, &expected);

    let removals: Vec<_> = log
        .events
        .iter()
        .filter_map(|e| match e {
            EventRecord::DuplicateRemoved { removed, kept } => Some((*removed, *kept)),
            _ => None,
        })
        .collect();
    assert_eq!(removals.len(), 11);
    assert_eq!(removals.last(), Some(&(105, 100)));

    let tail: Vec<_> = log.events.iter().rev().take(2).rev().cloned().collect();
    assert_eq!(
        tail,
        vec![
            EventRecord::ThresholdRelaxed {
                iteration: 2,
                segment_count: 2
            },
            EventRecord::Finished {
                corners: vec![0, 100, 160],
                passes: 2
            },
        ]
    );
}
