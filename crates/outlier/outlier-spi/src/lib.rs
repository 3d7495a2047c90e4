//! Outlier Detection Service Provider Interface
//!
//! Defines the detector contract, error types and shared data models.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::OutlierDetector;
pub use error::{OutlierError, Result};
pub use model::{
    DegeneratePolicy, DetectionResult, Dispersion, LabeledSamples, Method, PointKind,
};
