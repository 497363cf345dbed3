//! Configuration loading errors.

use std::io;

use crate::error::SegmentationError;

/// Errors that can occur when loading a YAML configuration.
#[derive(Debug)]
pub enum ConfigLoadError {
    /// IO error reading or writing the file.
    Io(io::Error),
    /// YAML parse or serialize error.
    Parse(serde_yaml::Error),
    /// Configuration validation failed.
    Validation(SegmentationError),
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::Io(e) => write!(f, "IO error: {}", e),
            ConfigLoadError::Parse(e) => write!(f, "YAML parse error: {}", e),
            ConfigLoadError::Validation(e) => write!(f, "Config validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigLoadError::Io(e) => Some(e),
            ConfigLoadError::Parse(e) => Some(e),
            ConfigLoadError::Validation(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigLoadError {
    fn from(err: io::Error) -> Self {
        ConfigLoadError::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigLoadError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigLoadError::Parse(err)
    }
}

impl From<SegmentationError> for ConfigLoadError {
    fn from(err: SegmentationError) -> Self {
        ConfigLoadError::Validation(err)
    }
}
