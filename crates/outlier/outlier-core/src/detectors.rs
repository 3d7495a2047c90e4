//! Outlier detector implementations.

use outlier_api::{validate_threshold, DetectorConfig};
use outlier_spi::{DegeneratePolicy, DetectionResult, Method, OutlierDetector, Result};
use serde::{Deserialize, Serialize};

use crate::scores::{
    classify, compute_iqr_scores_with, compute_modified_z_scores_with, compute_z_scores_with,
};

fn detect_with(method: Method, threshold: f64, scores: Vec<f64>) -> Result<DetectionResult> {
    let outliers = classify(&scores, threshold)?;
    Ok(DetectionResult::new(method, threshold, scores, outliers))
}

// ============================================================================
// Z-Score Detector
// ============================================================================

/// Z-Score based outlier detector.
///
/// Flags points more than `threshold` population standard deviations from
/// the mean. Sensitive to masking: a few extreme values inflate the
/// standard deviation enough to hide moderate outliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZScoreDetector {
    threshold: f64,
    degenerate: DegeneratePolicy,
}

impl ZScoreDetector {
    /// Create a new Z-Score detector.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Absolute z-score a point must exceed (commonly 2 or 3)
    pub fn new(threshold: f64) -> Result<Self> {
        validate_threshold("threshold", threshold)?;
        Ok(Self {
            threshold,
            degenerate: DegeneratePolicy::Reject,
        })
    }

    /// Set the zero-spread policy.
    pub fn with_degenerate(mut self, degenerate: DegeneratePolicy) -> Self {
        self.degenerate = degenerate;
        self
    }

    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate
    }
}

impl OutlierDetector for ZScoreDetector {
    fn method(&self) -> Method {
        Method::ZScore
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn score(&self, samples: &[f64]) -> Result<Vec<f64>> {
        compute_z_scores_with(samples, self.degenerate)
    }

    fn detect(&self, samples: &[f64]) -> Result<DetectionResult> {
        detect_with(self.method(), self.threshold, self.score(samples)?)
    }
}

// ============================================================================
// Modified Z-Score Detector
// ============================================================================

/// Modified z-score (median / MAD) outlier detector.
///
/// Robust to masking and swamping since neither the median nor the MAD moves
/// much when less than half of the points are extreme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifiedZScoreDetector {
    threshold: f64,
    degenerate: DegeneratePolicy,
}

impl ModifiedZScoreDetector {
    /// Create a new modified z-score detector.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Absolute modified z-score a point must exceed (3.5 is common)
    pub fn new(threshold: f64) -> Result<Self> {
        validate_threshold("threshold", threshold)?;
        Ok(Self {
            threshold,
            degenerate: DegeneratePolicy::Reject,
        })
    }

    /// Set the zero-spread policy.
    pub fn with_degenerate(mut self, degenerate: DegeneratePolicy) -> Self {
        self.degenerate = degenerate;
        self
    }

    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate
    }
}

impl OutlierDetector for ModifiedZScoreDetector {
    fn method(&self) -> Method {
        Method::ModifiedZScore
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn score(&self, samples: &[f64]) -> Result<Vec<f64>> {
        compute_modified_z_scores_with(samples, self.degenerate)
    }

    fn detect(&self, samples: &[f64]) -> Result<DetectionResult> {
        detect_with(self.method(), self.threshold, self.score(samples)?)
    }
}

// ============================================================================
// IQR Detector
// ============================================================================

/// Interquartile range (Tukey fence) outlier detector.
///
/// The rule behind box plot whiskers: points below `Q1 - k * IQR` or above
/// `Q3 + k * IQR` are outliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IqrDetector {
    multiplier: f64,
    degenerate: DegeneratePolicy,
}

impl IqrDetector {
    /// Create a new IQR detector.
    ///
    /// # Arguments
    ///
    /// * `multiplier` - IQR multiplier for the fences (typically 1.5)
    pub fn new(multiplier: f64) -> Result<Self> {
        validate_threshold("multiplier", multiplier)?;
        Ok(Self {
            multiplier,
            degenerate: DegeneratePolicy::Reject,
        })
    }

    /// Set the zero-spread policy.
    pub fn with_degenerate(mut self, degenerate: DegeneratePolicy) -> Self {
        self.degenerate = degenerate;
        self
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl OutlierDetector for IqrDetector {
    fn method(&self) -> Method {
        Method::Iqr
    }

    fn threshold(&self) -> f64 {
        self.multiplier
    }

    fn score(&self, samples: &[f64]) -> Result<Vec<f64>> {
        compute_iqr_scores_with(samples, self.degenerate)
    }

    fn detect(&self, samples: &[f64]) -> Result<DetectionResult> {
        detect_with(self.method(), self.multiplier, self.score(samples)?)
    }
}

/// Build the detector a configuration describes.
pub fn build_detector(config: &DetectorConfig) -> Result<Box<dyn OutlierDetector>> {
    config.validate()?;
    let detector: Box<dyn OutlierDetector> = match config.method {
        Method::ZScore => {
            Box::new(ZScoreDetector::new(config.threshold)?.with_degenerate(config.degenerate))
        }
        Method::ModifiedZScore => Box::new(
            ModifiedZScoreDetector::new(config.threshold)?.with_degenerate(config.degenerate),
        ),
        Method::Iqr => {
            Box::new(IqrDetector::new(config.threshold)?.with_degenerate(config.degenerate))
        }
    };
    Ok(detector)
}
