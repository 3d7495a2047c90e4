//! Outlier detector trait definition.

use crate::error::Result;
use crate::model::{DetectionResult, Method};

/// Outlier detector trait.
///
/// Detectors are stateless: every call scores the sample set it is given,
/// so a single instance can be shared across threads.
pub trait OutlierDetector: Send + Sync {
    /// Scoring method used by this detector.
    fn method(&self) -> Method;

    /// Threshold an absolute score must strictly exceed to be an outlier.
    fn threshold(&self) -> f64;

    /// Compute one score per sample, in input order.
    fn score(&self, samples: &[f64]) -> Result<Vec<f64>>;

    /// Score the samples and classify them against the threshold.
    fn detect(&self, samples: &[f64]) -> Result<DetectionResult>;
}
