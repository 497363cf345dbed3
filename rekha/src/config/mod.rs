//! YAML configuration for rekha.
//!
//! One file holds every tunable, grouped by pipeline stage. Missing sections
//! and fields fall back to their defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rekha::config::RekhaConfig;
//!
//! // Load from default path (configs/default.yaml), or built-in defaults
//! let config = RekhaConfig::load_default()?;
//!
//! let stroke = PointSequence::from_samples(&samples, &config.stroke)?;
//! let segmenter = config.to_segmenter();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | `stroke` | Curvature window for derived attributes |
//! | `candidates` | Curvature and speed factors |
//! | `duplicates` | Minimum candidate separation |
//! | `fitting` | Probably-line ratio |
//! | `merge` | Error slack, iteration budget, tie-break, scan order |
//!
//! ## Example YAML
//!
//! ```yaml
//! stroke:
//!   curvature_window: 24.0
//! candidates:
//!   curvature_factor: 2.0
//!   speed_factor: 0.75
//!   speed_baseline: path_length_per_point
//! merge:
//!   error_slack: 1.5
//!   tie_break: prefer_left
//! ```

mod error;
mod rekha;

pub use error::ConfigLoadError;
pub use rekha::RekhaConfig;
