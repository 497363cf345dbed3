//! Configuration for the corner-finding pipeline stages.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SegmentationError};

/// How the mean-speed baseline for the slowness test is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedBaseline {
    /// Total path length divided by point count.
    #[default]
    PathLengthPerPoint,
    /// Arithmetic mean of the per-point speeds.
    MeanSampleSpeed,
}

/// Configuration for candidate corner detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateConfig {
    /// Multiple of the median |curvature| a point must exceed.
    /// Default: 2.0
    pub curvature_factor: f64,

    /// Multiple of the mean speed a point must stay below.
    /// Default: 0.75
    pub speed_factor: f64,

    /// Mean-speed baseline.
    /// Default: path length per point
    pub speed_baseline: SpeedBaseline,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            curvature_factor: 2.0,
            speed_factor: 0.75,
            speed_baseline: SpeedBaseline::PathLengthPerPoint,
        }
    }
}

impl CandidateConfig {
    /// Builder-style setter for curvature factor.
    pub fn with_curvature_factor(mut self, value: f64) -> Self {
        self.curvature_factor = value;
        self
    }

    /// Builder-style setter for speed factor.
    pub fn with_speed_factor(mut self, value: f64) -> Self {
        self.speed_factor = value;
        self
    }

    /// Builder-style setter for speed baseline.
    pub fn with_speed_baseline(mut self, value: SpeedBaseline) -> Self {
        self.speed_baseline = value;
        self
    }
}

/// Configuration for collapsing near-duplicate candidates.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DuplicateConfig {
    /// Candidates closer than this along the path collapse to one.
    /// Default: 15.0 stroke units
    pub min_separation: f64,
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            min_separation: 15.0,
        }
    }
}

impl DuplicateConfig {
    /// Builder-style setter for minimum separation.
    pub fn with_min_separation(mut self, value: f64) -> Self {
        self.min_separation = value;
        self
    }
}

/// Configuration for per-segment model selection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Chord / path-length ratio above which a segment is a line outright.
    /// Default: 0.90
    pub probably_line_ratio: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            probably_line_ratio: 0.90,
        }
    }
}

impl FitConfig {
    /// Builder-style setter for the probably-line ratio.
    pub fn with_probably_line_ratio(mut self, value: f64) -> Self {
        self.probably_line_ratio = value;
        self
    }
}

/// What to do when the left and right merge hypotheses score the same error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Merge left if acceptable, otherwise right if acceptable.
    #[default]
    PreferLeft,
    /// Merge right if acceptable, otherwise left if acceptable.
    PreferRight,
    /// Leave the segment alone.
    Skip,
}

/// Order in which segments are examined for merging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeScanOrder {
    /// Segments in stroke order.
    #[default]
    TimeOrder,
    /// Shortest segment first, stroke order between equal lengths.
    ShortestFirst,
}

/// Which merged segments skip the error comparison and are accepted outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineShortcut {
    /// Any merged segment classified as a line.
    #[default]
    ClassifiedLine,
    /// Only merged segments that pass the probably-line straightness test.
    ProbablyLine,
}

/// Configuration for the iterative merge.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Weight on the previous/next segment error in the acceptance test
    /// `merged < error_slack × neighbour + this`.
    /// Default: 1.5
    pub error_slack: f64,

    /// Merged segments accepted without the error comparison.
    /// Default: classified line
    pub line_shortcut: LineShortcut,

    /// Iteration number the threshold starts from.
    /// Default: 1
    pub initial_iteration: u32,

    /// Maximum merge-loop passes (merges plus threshold relaxations).
    /// Default: 10_000
    pub max_iterations: usize,

    /// Equal-error policy.
    /// Default: prefer left
    pub tie_break: TieBreak,

    /// Segment scan order.
    /// Default: time order
    pub scan_order: MergeScanOrder,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            error_slack: 1.5,
            line_shortcut: LineShortcut::ClassifiedLine,
            initial_iteration: 1,
            max_iterations: 10_000,
            tie_break: TieBreak::PreferLeft,
            scan_order: MergeScanOrder::TimeOrder,
        }
    }
}

impl MergeConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for error slack.
    pub fn with_error_slack(mut self, value: f64) -> Self {
        self.error_slack = value;
        self
    }

    /// Builder-style setter for the line shortcut.
    pub fn with_line_shortcut(mut self, value: LineShortcut) -> Self {
        self.line_shortcut = value;
        self
    }

    /// Builder-style setter for the starting iteration number.
    pub fn with_initial_iteration(mut self, value: u32) -> Self {
        self.initial_iteration = value;
        self
    }

    /// Builder-style setter for the pass budget.
    pub fn with_max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = value;
        self
    }

    /// Builder-style setter for the tie-break policy.
    pub fn with_tie_break(mut self, value: TieBreak) -> Self {
        self.tie_break = value;
        self
    }

    /// Builder-style setter for the scan order.
    pub fn with_scan_order(mut self, value: MergeScanOrder) -> Self {
        self.scan_order = value;
        self
    }
}

/// All settings the [`Segmenter`](super::Segmenter) needs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Candidate detection.
    pub candidates: CandidateConfig,
    /// Duplicate collapsing.
    pub duplicates: DuplicateConfig,
    /// Segment model selection.
    pub fitting: FitConfig,
    /// Iterative merge.
    pub merge: MergeConfig,
}

impl SegmenterConfig {
    /// Check every value is usable.
    ///
    /// # Errors
    /// `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        positive("candidates.curvature_factor", self.candidates.curvature_factor, true)?;
        positive("candidates.speed_factor", self.candidates.speed_factor, false)?;
        positive("duplicates.min_separation", self.duplicates.min_separation, true)?;

        let ratio = self.fitting.probably_line_ratio;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(SegmentationError::InvalidConfig(format!(
                "fitting.probably_line_ratio must be in [0, 1], got {ratio}"
            )));
        }

        positive("merge.error_slack", self.merge.error_slack, true)?;
        if self.merge.initial_iteration == 0 {
            return Err(SegmentationError::InvalidConfig(
                "merge.initial_iteration must be at least 1".to_string(),
            ));
        }
        if self.merge.max_iterations == 0 {
            return Err(SegmentationError::InvalidConfig(
                "merge.max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Finite and positive, or also zero when `allow_zero`.
fn positive(name: &str, value: f64, allow_zero: bool) -> Result<()> {
    let ok = value.is_finite() && (value > 0.0 || (allow_zero && value == 0.0));
    if ok {
        Ok(())
    } else {
        Err(SegmentationError::InvalidConfig(format!(
            "{name} must be {}, got {value}",
            if allow_zero { "non-negative" } else { "positive" }
        )))
    }
}
