//! Main RekhaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::StrokeConfig;
use crate::error::{Result, SegmentationError};
use crate::segmentation::{
    CandidateConfig, DuplicateConfig, FitConfig, MergeConfig, Segmenter, SegmenterConfig,
};

use super::error::ConfigLoadError;

/// Full rekha configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct RekhaConfig {
    /// Derived attribute settings
    #[serde(default)]
    pub stroke: StrokeConfig,

    /// Candidate detection
    #[serde(default)]
    pub candidates: CandidateConfig,

    /// Duplicate collapsing
    #[serde(default)]
    pub duplicates: DuplicateConfig,

    /// Line/arc classification
    #[serde(default)]
    pub fitting: FitConfig,

    /// Iterative merge
    #[serde(default)]
    pub merge: MergeConfig,
}

impl RekhaConfig {
    /// Load and validate configuration from a YAML file.
    ///
    /// # Errors
    /// Returns `ConfigLoadError` if the file cannot be read, parsed, or validated.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        let config: RekhaConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default config path (configs/default.yaml), or use
    /// built-in defaults when the file is absent.
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new("configs/default.yaml");
        if path.exists() {
            Self::from_yaml_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize configuration to a YAML string.
    pub fn to_yaml(&self) -> std::result::Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml_file<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), ConfigLoadError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        let window = self.stroke.curvature_window;
        if !window.is_finite() || window <= 0.0 {
            return Err(SegmentationError::InvalidConfig(format!(
                "stroke.curvature_window must be positive, got {window}"
            )));
        }
        self.segmenter_config().validate()
    }

    /// Get the pipeline settings
    pub fn segmenter_config(&self) -> SegmenterConfig {
        SegmenterConfig {
            candidates: self.candidates.clone(),
            duplicates: self.duplicates.clone(),
            fitting: self.fitting.clone(),
            merge: self.merge.clone(),
        }
    }

    /// Build a segmenter from these settings
    pub fn to_segmenter(&self) -> Segmenter {
        Segmenter::new(self.segmenter_config())
    }
}
