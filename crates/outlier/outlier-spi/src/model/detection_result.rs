//! Outlier detection result types.

use serde::{Deserialize, Serialize};

use super::Method;

/// Outlier detection result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Method that produced the scores.
    pub method: Method,
    /// Threshold used for classification.
    pub threshold: f64,
    /// Score for each point, in input order.
    pub scores: Vec<f64>,
    /// Ascending indices whose absolute score exceeds the threshold.
    pub outliers: Vec<usize>,
}

impl DetectionResult {
    /// Create a new detection result.
    pub fn new(method: Method, threshold: f64, scores: Vec<f64>, outliers: Vec<usize>) -> Self {
        Self {
            method,
            threshold,
            scores,
            outliers,
        }
    }

    /// Number of scored points.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when no points were scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Count of detected outliers.
    pub fn outlier_count(&self) -> usize {
        self.outliers.len()
    }

    /// Whether the point at `index` was classified as an outlier.
    pub fn is_outlier(&self, index: usize) -> bool {
        self.outliers.binary_search(&index).is_ok()
    }

    /// Boolean mask parallel to the scores.
    pub fn mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.scores.len()];
        for &i in &self.outliers {
            if let Some(flag) = mask.get_mut(i) {
                *flag = true;
            }
        }
        mask
    }

    /// Values of the detected outliers, looked up in the scored samples.
    pub fn outlier_values(&self, samples: &[f64]) -> Vec<f64> {
        self.outliers
            .iter()
            .filter_map(|&i| samples.get(i).copied())
            .collect()
    }
}
