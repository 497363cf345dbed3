//! Error types for rekha

/// Result type alias
pub type Result<T> = std::result::Result<T, SegmentationError>;

/// Segmentation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SegmentationError {
    /// Input stroke cannot be segmented (too few points, zero length, bad values)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Merge loop did not converge within the configured budget
    #[error("Merge did not converge within {limit} passes")]
    ResourceExhausted {
        /// Configured maximum number of merge-loop passes
        limit: usize,
    },

    /// Cancellation was requested through a [`CancellationToken`](crate::segmentation::CancellationToken)
    #[error("Segmentation cancelled after {passes} passes")]
    Cancelled {
        /// Merge-loop passes completed before cancellation was observed
        passes: usize,
    },

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SegmentationError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::ResourceExhausted { .. } => "RESOURCE_EXHAUSTED",
            Self::Cancelled { .. } => "CANCELLED",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SegmentationError::ResourceExhausted { limit: 7 };
        assert_eq!(err.to_string(), "Merge did not converge within 7 passes");
        assert_eq!(err.code(), "RESOURCE_EXHAUSTED");

        let err = SegmentationError::InvalidInput("need 2 points".into());
        assert_eq!(err.to_string(), "Invalid input: need 2 points");
    }
}
