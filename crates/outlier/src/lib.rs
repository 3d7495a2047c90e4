//! # outlier
//!
//! Outlier detection for one-dimensional sample sets.
//!
//! Two scoring methods are provided side by side. The z-score measures
//! distance from the mean in standard deviations and is easily distorted by
//! the outliers it is looking for. The modified z-score measures distance
//! from the median in median absolute deviations, scaled by 0.6745, and
//! keeps working when a minority of the points are extreme.
//!
//! ```
//! use outlier::prelude::*;
//!
//! let samples = [10.5, 11.0, 25.0, 10.8, 11.2, -5.0, 10.9, 11.1, 10.7, 30.0];
//! let scores = compute_modified_z_scores(&samples)?;
//! assert_eq!(classify(&scores, 3.5)?, vec![2, 5, 9]);
//! # Ok::<(), OutlierError>(())
//! ```

pub use outlier_facade::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::OutlierDetector;
    pub use crate::{IqrDetector, ModifiedZScoreDetector, ZScoreDetector};
    pub use crate::{classify, compute_modified_z_scores, compute_z_scores, compare_methods};
    pub use crate::{DetectionResult, DetectorConfig, Method, MethodComparison};
    pub use crate::{DegeneratePolicy, OutlierError, Result};
}
