//! Configuration file integration tests for rekha.

mod common;

use std::io::Write;

use rekha::segmentation::{LineShortcut, MergeScanOrder, SpeedBaseline, TieBreak};
use rekha::{ConfigLoadError, RekhaConfig};
use tempfile::NamedTempFile;

const SHIPPED: &str = include_str!("../configs/default.yaml");

#[test]
fn test_shipped_config_matches_defaults() {
    let loaded = RekhaConfig::from_yaml_str(SHIPPED).unwrap();
    let defaults = RekhaConfig::default();

    assert_eq!(loaded.stroke.curvature_window, defaults.stroke.curvature_window);
    assert_eq!(loaded.candidates.curvature_factor, defaults.candidates.curvature_factor);
    assert_eq!(loaded.candidates.speed_factor, defaults.candidates.speed_factor);
    assert_eq!(loaded.candidates.speed_baseline, SpeedBaseline::PathLengthPerPoint);
    assert_eq!(loaded.duplicates.min_separation, defaults.duplicates.min_separation);
    assert_eq!(loaded.fitting.probably_line_ratio, defaults.fitting.probably_line_ratio);
    assert_eq!(loaded.merge.error_slack, defaults.merge.error_slack);
    assert_eq!(loaded.merge.max_iterations, defaults.merge.max_iterations);
    assert_eq!(loaded.merge.tie_break, TieBreak::PreferLeft);
    assert_eq!(loaded.merge.scan_order, MergeScanOrder::TimeOrder);
    assert_eq!(loaded.merge.line_shortcut, LineShortcut::ClassifiedLine);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "duplicates:\n  min_separation: 8.0\nmerge:\n  tie_break: skip").unwrap();

    let config = RekhaConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.duplicates.min_separation, 8.0);
    assert_eq!(config.merge.tie_break, TieBreak::Skip);
    assert_eq!(config.fitting.probably_line_ratio, 0.90);
}

#[test]
fn test_line_shortcut_from_yaml() {
    let config = RekhaConfig::from_yaml_str("merge:\n  line_shortcut: probably_line\n").unwrap();
    assert_eq!(config.merge.line_shortcut, LineShortcut::ProbablyLine);
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tuned.yaml");

    let mut config = RekhaConfig::default();
    config.candidates.speed_factor = 0.6;
    config.merge.scan_order = MergeScanOrder::ShortestFirst;
    config.to_yaml_file(&path).unwrap();

    let reloaded = RekhaConfig::from_yaml_file(&path).unwrap();
    assert_eq!(reloaded.candidates.speed_factor, 0.6);
    assert_eq!(reloaded.merge.scan_order, MergeScanOrder::ShortestFirst);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RekhaConfig::from_yaml_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io(_)));
    assert!(err.to_string().starts_with("IO error"));
}

#[test]
fn test_invalid_value_is_validation_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "merge:\n  max_iterations: 0").unwrap();

    let err = RekhaConfig::from_yaml_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Validation(_)));
}

#[test]
fn test_unknown_enum_is_parse_error() {
    let err = RekhaConfig::from_yaml_str("merge:\n  tie_break: sideways\n").unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse(_)));
}

#[test]
fn test_configured_segmenter_runs() {
    let config = RekhaConfig::from_yaml_str(SHIPPED).unwrap();
    let samples = common::l_shape(100, 60);
    let mut stroke = rekha::PointSequence::from_samples(&samples, &config.stroke).unwrap();

    let result = config.to_segmenter().run(&mut stroke).unwrap();
    assert_eq!(result.corners, vec![0, 100, 160]);
}
