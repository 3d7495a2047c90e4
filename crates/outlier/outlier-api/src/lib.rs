//! Outlier Detection API
//!
//! Configuration types for detectors and synthetic scenarios.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use outlier_spi::{DegeneratePolicy, Method, OutlierError, Result};

/// Parse a JSON document into a configuration type.
fn parse_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| OutlierError::Config(e.to_string()))
}

/// Reject thresholds that cannot separate scores.
pub fn validate_threshold(name: &str, threshold: f64) -> Result<()> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(OutlierError::invalid_parameter(
            name,
            format!("must be a positive finite number, got {}", threshold),
        ));
    }
    Ok(())
}

fn validate_finite(name: &str, values: &[f64]) -> Result<()> {
    if let Some(v) = values.iter().find(|v| !v.is_finite()) {
        return Err(OutlierError::invalid_parameter(
            name,
            format!("contains non-finite value {}", v),
        ));
    }
    Ok(())
}

fn validate_spread(name: &str, std_dev: f64) -> Result<()> {
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(OutlierError::invalid_parameter(
            name,
            format!("must be a non-negative finite number, got {}", std_dev),
        ));
    }
    Ok(())
}

// ============================================================================
// Detector Configuration
// ============================================================================

/// Detector configuration.
///
/// The threshold applies to absolute scores: z-scores for
/// [`Method::ZScore`], modified z-scores for [`Method::ModifiedZScore`] and
/// the fence multiplier for [`Method::Iqr`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub method: Method,
    pub threshold: f64,
    pub degenerate: DegeneratePolicy,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            method: Method::ZScore,
            threshold: 3.0,
            degenerate: DegeneratePolicy::Reject,
        }
    }
}

impl DetectorConfig {
    pub fn new(method: Method, threshold: f64) -> Self {
        Self {
            method,
            threshold,
            degenerate: DegeneratePolicy::Reject,
        }
    }

    /// Set the zero-spread policy.
    pub fn with_degenerate(mut self, degenerate: DegeneratePolicy) -> Self {
        self.degenerate = degenerate;
        self
    }

    /// Load and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = parse_json(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_threshold("threshold", self.threshold)
    }
}

// ============================================================================
// Scenario Configuration
// ============================================================================

/// Masking scenario: a normal sample plus moderate and extreme planted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskingScenarioConfig {
    /// Seed for the sample generator.
    pub seed: u64,
    /// Number of in-distribution draws (default: 100).
    pub normal_count: usize,
    pub normal_mean: f64,
    pub normal_std_dev: f64,
    /// Values that should be detected (default: 3.5, 3.7).
    pub moderate: Vec<f64>,
    /// Values that inflate the spread (default: 15, 16).
    pub extreme: Vec<f64>,
}

impl Default for MaskingScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            normal_count: 100,
            normal_mean: 0.0,
            normal_std_dev: 1.0,
            moderate: vec![3.5, 3.7],
            extreme: vec![15.0, 16.0],
        }
    }
}

impl MaskingScenarioConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = parse_json(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_finite("normal_mean", &[self.normal_mean])?;
        validate_spread("normal_std_dev", self.normal_std_dev)?;
        validate_finite("moderate", &self.moderate)?;
        validate_finite("extreme", &self.extreme)?;
        if self.total_len() == 0 {
            return Err(OutlierError::invalid_parameter(
                "normal_count",
                "scenario would contain no samples",
            ));
        }
        Ok(())
    }

    /// Number of samples the scenario generates.
    pub fn total_len(&self) -> usize {
        self.normal_count + self.moderate.len() + self.extreme.len()
    }
}

/// Swamping scenario: tight clusters plus a single extreme value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwampingScenarioConfig {
    /// Seed for the sample generator.
    pub seed: u64,
    /// Draws per cluster (default: 50).
    pub cluster_size: usize,
    /// One cluster per center (default: 0 and 5).
    pub cluster_centers: Vec<f64>,
    pub cluster_std_dev: f64,
    /// Values that inflate the spread (default: 20).
    pub extreme: Vec<f64>,
}

impl Default for SwampingScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            cluster_size: 50,
            cluster_centers: vec![0.0, 5.0],
            cluster_std_dev: 0.5,
            extreme: vec![20.0],
        }
    }
}

impl SwampingScenarioConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = parse_json(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_finite("cluster_centers", &self.cluster_centers)?;
        validate_spread("cluster_std_dev", self.cluster_std_dev)?;
        validate_finite("extreme", &self.extreme)?;
        if self.total_len() == 0 {
            return Err(OutlierError::invalid_parameter(
                "cluster_size",
                "scenario would contain no samples",
            ));
        }
        Ok(())
    }

    /// Number of samples the scenario generates.
    pub fn total_len(&self) -> usize {
        self.cluster_size * self.cluster_centers.len() + self.extreme.len()
    }
}
