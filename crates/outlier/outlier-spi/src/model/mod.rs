//! Data models for outlier detection.
//!
//! This module contains data structures used throughout the outlier detection system.

mod degenerate_policy;
mod detection_result;
mod labeled_samples;
mod method;

pub use degenerate_policy::DegeneratePolicy;
pub use detection_result::DetectionResult;
pub use labeled_samples::{LabeledSamples, PointKind};
pub use method::{Dispersion, Method};
