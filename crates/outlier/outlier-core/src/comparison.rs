//! Side-by-side naive and robust detection on the same sample set.

use outlier_spi::{DetectionResult, OutlierDetector, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detectors::{ModifiedZScoreDetector, ZScoreDetector};

/// Z-score and modified z-score results for one sample set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodComparison {
    /// Mean / standard deviation based result.
    pub naive: DetectionResult,
    /// Median / MAD based result.
    pub robust: DetectionResult,
}

impl MethodComparison {
    /// Points only the robust method flags: hidden from the z-score by masking.
    pub fn masked(&self) -> Vec<usize> {
        difference(&self.robust, &self.naive)
    }

    /// Points only the z-score flags: false positives from swamping.
    pub fn swamped(&self) -> Vec<usize> {
        difference(&self.naive, &self.robust)
    }

    /// Points both methods flag.
    pub fn agreed(&self) -> Vec<usize> {
        self.naive
            .outliers
            .iter()
            .copied()
            .filter(|&i| self.robust.is_outlier(i))
            .collect()
    }

    /// True when both methods flag exactly the same points.
    pub fn is_consistent(&self) -> bool {
        self.naive.outliers == self.robust.outliers
    }
}

fn difference(a: &DetectionResult, b: &DetectionResult) -> Vec<usize> {
    a.outliers
        .iter()
        .copied()
        .filter(|&i| !b.is_outlier(i))
        .collect()
}

/// Run the z-score and modified z-score detectors at the same threshold.
pub fn compare_methods(samples: &[f64], threshold: f64) -> Result<MethodComparison> {
    let naive = ZScoreDetector::new(threshold)?.detect(samples)?;
    let robust = ModifiedZScoreDetector::new(threshold)?.detect(samples)?;
    debug!(
        naive = naive.outlier_count(),
        robust = robust.outlier_count(),
        "compared detection methods"
    );
    Ok(MethodComparison { naive, robust })
}
