//! Candidate corner detection.
//!
//! A sample is a candidate corner when the pen is both turning hard and
//! moving slowly. Both tests are relative to the stroke itself: curvature is
//! compared with a multiple of the median |curvature|, speed with a fraction
//! of the mean speed.

use serde::{Deserialize, Serialize};

use super::config::{CandidateConfig, SpeedBaseline};
use crate::core::PointStream;
use crate::core::math::{mean, median};
use crate::error::{Result, SegmentationError};

/// Strictly ascending set of sample indices that always holds both endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    indices: Vec<usize>,
}

impl CandidateSet {
    /// Endpoints only, for a stroke of `len` points (`len >= 2`).
    pub fn endpoints(len: usize) -> Result<Self> {
        Self::from_indices(std::iter::empty(), len)
    }

    /// Build from arbitrary indices. Sorts, deduplicates, adds both
    /// endpoints and rejects out-of-range indices.
    pub fn from_indices<I>(indices: I, len: usize) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        if len < 2 {
            return Err(SegmentationError::InvalidInput(format!(
                "a stroke needs at least 2 points, got {len}"
            )));
        }

        let mut all: Vec<usize> = indices.into_iter().collect();
        if let Some(&bad) = all.iter().find(|&&i| i >= len) {
            return Err(SegmentationError::InvalidInput(format!(
                "candidate index {bad} out of range for {len} points"
            )));
        }
        all.push(0);
        all.push(len - 1);
        all.sort_unstable();
        all.dedup();

        Ok(Self { indices: all })
    }

    /// Indices in ascending order.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Number of candidates (always at least 2).
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false; both endpoints are present.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether `index` is a candidate.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// First index (always 0).
    pub fn first(&self) -> usize {
        self.indices[0]
    }

    /// Last index (always the final sample).
    pub fn last(&self) -> usize {
        self.indices[self.indices.len() - 1]
    }

    /// Number of segments the candidates delimit.
    pub fn segment_count(&self) -> usize {
        self.indices.len() - 1
    }

    /// Consecutive `(start, end)` index pairs.
    pub fn bounds(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.indices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Remove an interior candidate. Endpoints and absent indices are left
    /// alone and report `false`.
    pub fn remove(&mut self, index: usize) -> bool {
        if index == self.first() || index == self.last() {
            return false;
        }
        match self.indices.binary_search(&index) {
            Ok(pos) => {
                self.indices.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove by position. Endpoint positions are refused.
    pub(crate) fn remove_at(&mut self, pos: usize) -> Option<usize> {
        if pos == 0 || pos + 1 >= self.indices.len() {
            return None;
        }
        Some(self.indices.remove(pos))
    }

    /// Owned copy of the indices.
    pub fn to_vec(&self) -> Vec<usize> {
        self.indices.clone()
    }
}

/// Result of candidate detection with the statistics behind it.
#[derive(Clone, Debug)]
pub struct CandidateReport {
    /// Detected candidates, endpoints included.
    pub candidates: CandidateSet,
    /// Median |curvature| over the stroke.
    pub median_curvature: f64,
    /// Mean speed baseline.
    pub mean_speed: f64,
    /// |curvature| must exceed this.
    pub curvature_threshold: f64,
    /// Speed must stay below this.
    pub speed_threshold: f64,
    /// Per-point: |curvature| above threshold.
    pub curvy: Vec<bool>,
    /// Per-point: speed below threshold.
    pub slow: Vec<bool>,
}

/// Propose candidate corners from curvature and speed.
///
/// # Errors
/// `InvalidInput` when the stream has fewer than 2 points.
pub fn detect_candidates<S>(stream: &S, config: &CandidateConfig) -> Result<CandidateReport>
where
    S: PointStream + ?Sized,
{
    let n = stream.len();
    if n < 2 {
        return Err(SegmentationError::InvalidInput(format!(
            "a stroke needs at least 2 points, got {n}"
        )));
    }

    let abs_curvature: Vec<f64> = (0..n).map(|i| stream.curvature(i).abs()).collect();
    let median_curvature = median(&abs_curvature).unwrap_or(0.0);

    let mean_speed = match config.speed_baseline {
        SpeedBaseline::PathLengthPerPoint => stream.total_length() / n as f64,
        SpeedBaseline::MeanSampleSpeed => {
            let speeds: Vec<f64> = (0..n).map(|i| stream.speed(i)).collect();
            mean(&speeds).unwrap_or(0.0)
        }
    };

    let curvature_threshold = config.curvature_factor * median_curvature;
    let speed_threshold = config.speed_factor * mean_speed;

    let curvy: Vec<bool> = abs_curvature
        .iter()
        .map(|&c| c > curvature_threshold)
        .collect();
    let slow: Vec<bool> = (0..n)
        .map(|i| stream.speed(i) < speed_threshold)
        .collect();

    let candidates =
        CandidateSet::from_indices((0..n).filter(|&i| curvy[i] && slow[i]), n)?;

    log::debug!(
        "Candidate detection: {} points, median |k|={:.5}, mean speed={:.4}, {} candidates",
        n,
        median_curvature,
        mean_speed,
        candidates.len()
    );

    Ok(CandidateReport {
        candidates,
        median_curvature,
        mean_speed,
        curvature_threshold,
        speed_threshold,
        curvy,
        slow,
    })
}
