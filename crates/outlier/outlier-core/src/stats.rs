//! Location and spread estimates over sample sets.
//!
//! Public functions validate their input; the `*_of` helpers assume a
//! non-empty, finite slice and are shared with the scoring code.

use std::borrow::Cow;

use outlier_api::validate_threshold;
use outlier_spi::{OutlierError, Result};
use serde::{Deserialize, Serialize};

/// Check that a sample set is non-empty and finite.
pub fn validate_samples(samples: &[f64]) -> Result<()> {
    if samples.is_empty() {
        return Err(OutlierError::EmptyInput);
    }
    if let Some((index, &value)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(OutlierError::NonFiniteSample { index, value });
    }
    Ok(())
}

/// Arithmetic mean.
pub fn mean(samples: &[f64]) -> Result<f64> {
    validate_samples(samples)?;
    let (scaled, factor) = rescaled(samples);
    Ok(mean_of(&scaled) / factor)
}

/// Population standard deviation (divides by n).
pub fn std_dev(samples: &[f64]) -> Result<f64> {
    validate_samples(samples)?;
    let (scaled, factor) = rescaled(samples);
    Ok(std_dev_of(&scaled, mean_of(&scaled)) / factor)
}

/// Median; the mean of the two middle values for even lengths.
pub fn median(samples: &[f64]) -> Result<f64> {
    validate_samples(samples)?;
    let (scaled, factor) = rescaled(samples);
    Ok(median_of(&scaled) / factor)
}

/// Median absolute deviation from the median, unscaled.
pub fn median_absolute_deviation(samples: &[f64]) -> Result<f64> {
    validate_samples(samples)?;
    let (scaled, factor) = rescaled(samples);
    Ok(mad_of(&scaled, median_of(&scaled)) / factor)
}

/// First and third quartiles by linear interpolation between order statistics.
pub fn quartiles(samples: &[f64]) -> Result<(f64, f64)> {
    validate_samples(samples)?;
    let (scaled, factor) = rescaled(samples);
    let (q1, q3) = quartiles_of(&scaled);
    Ok((q1 / factor, q3 / factor))
}

/// Magnitude above which squared deviations may overflow.
const LARGE_MAGNITUDE: f64 = 1e150;

/// Samples brought down by 2^-600 when their magnitude could overflow sums,
/// squares or differences, together with the factor applied (1.0 otherwise).
///
/// Power-of-two scaling is exact, and every score is scale invariant.
pub(crate) fn rescaled(samples: &[f64]) -> (Cow<'_, [f64]>, f64) {
    let max_abs = samples.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
    if max_abs <= LARGE_MAGNITUDE {
        return (Cow::Borrowed(samples), 1.0);
    }
    let factor = 2.0_f64.powi(-600);
    (Cow::Owned(samples.iter().map(|x| x * factor).collect()), factor)
}

pub(crate) fn mean_of(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

pub(crate) fn std_dev_of(samples: &[f64], mean: f64) -> f64 {
    let n = samples.len() as f64;
    (samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt()
}

pub(crate) fn median_of(samples: &[f64]) -> f64 {
    median_sorted(&sorted(samples))
}

pub(crate) fn mad_of(samples: &[f64], median: f64) -> f64 {
    let deviations: Vec<f64> = samples.iter().map(|x| (x - median).abs()).collect();
    median_of(&deviations)
}

pub(crate) fn quartiles_of(samples: &[f64]) -> (f64, f64) {
    let sorted = sorted(samples);
    (quantile_sorted(&sorted, 0.25), quantile_sorted(&sorted, 0.75))
}

/// True when every sample equals the first one.
pub(crate) fn is_constant(samples: &[f64]) -> bool {
    match samples.first() {
        Some(&first) => samples.iter().all(|&x| x == first),
        None => true,
    }
}

fn sorted(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

// ============================================================================
// Bands
// ============================================================================

/// Mean ± k standard deviations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SigmaBand {
    pub mean: f64,
    pub std_dev: f64,
    pub lower: f64,
    pub upper: f64,
}

impl SigmaBand {
    /// Compute the band for `samples` at `k` standard deviations.
    pub fn new(samples: &[f64], k: f64) -> Result<Self> {
        validate_samples(samples)?;
        validate_threshold("k", k)?;
        let (scaled, factor) = rescaled(samples);
        let mean_scaled = mean_of(&scaled);
        let mean = mean_scaled / factor;
        let std_dev = std_dev_of(&scaled, mean_scaled) / factor;
        Ok(Self {
            mean,
            std_dev,
            lower: mean - k * std_dev,
            upper: mean + k * std_dev,
        })
    }

    /// Whether `value` lies inside the band, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Tukey fences: Q1 − k·IQR and Q3 + k·IQR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fences {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Fences {
    /// Compute the fences for `samples` with IQR multiplier `k`.
    pub fn new(samples: &[f64], k: f64) -> Result<Self> {
        validate_samples(samples)?;
        validate_threshold("k", k)?;
        let (scaled, factor) = rescaled(samples);
        let (q1, q3) = quartiles_of(&scaled);
        let iqr = (q3 - q1) / factor;
        let (q1, q3) = (q1 / factor, q3 / factor);
        Ok(Self {
            q1,
            q3,
            lower: q1 - k * iqr,
            upper: q3 + k * iqr,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Whether `value` lies inside the fences, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Mean ± k standard deviations of `samples`.
pub fn sigma_band(samples: &[f64], k: f64) -> Result<SigmaBand> {
    SigmaBand::new(samples, k)
}

/// Tukey fences of `samples` with IQR multiplier `k`.
pub fn tukey_fences(samples: &[f64], k: f64) -> Result<Fences> {
    Fences::new(samples, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_samples(&[]), Err(OutlierError::EmptyInput));
        assert_eq!(mean(&[]), Err(OutlierError::EmptyInput));
    }

    #[test]
    fn test_validate_non_finite() {
        let err = validate_samples(&[1.0, f64::NAN, 3.0]).unwrap_err();
        assert!(matches!(err, OutlierError::NonFiniteSample { index: 1, .. }));

        let err = median(&[1.0, 2.0, f64::NEG_INFINITY]).unwrap_err();
        assert!(matches!(err, OutlierError::NonFiniteSample { index: 2, .. }));
    }

    #[test]
    fn test_mean_and_std_dev() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((mean(&data).unwrap() - 3.0).abs() < EPS);
        assert!((std_dev(&data).unwrap() - 2.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_std_dev_single_sample() {
        assert_eq!(std_dev(&[7.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
        assert_eq!(median(&[9.0]).unwrap(), 9.0);
    }

    #[test]
    fn test_mad() {
        // median 3.5, deviations 2.5 1.5 0.5 0.5 1.5 96.5
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        assert_eq!(median_absolute_deviation(&data).unwrap(), 1.5);
    }

    #[test]
    fn test_mad_zero_with_distinct_values() {
        assert_eq!(median_absolute_deviation(&[1.0, 1.0, 1.0, 5.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_quartiles_linear_interpolation() {
        let (q1, q3) = quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert!((q1 - 2.25).abs() < EPS);
        assert!((q3 - 4.75).abs() < EPS);

        let (q1, q3) = quartiles(&[42.0]).unwrap();
        assert_eq!((q1, q3), (42.0, 42.0));
    }

    #[test]
    fn test_is_constant() {
        assert!(is_constant(&[5.0, 5.0, 5.0]));
        assert!(!is_constant(&[5.0, 5.0, 5.1]));
    }

    #[test]
    fn test_sigma_band() {
        let band = SigmaBand::new(&[1.0, 2.0, 3.0, 4.0, 5.0], 2.0).unwrap();
        let sd = 2.0_f64.sqrt();
        assert!((band.lower - (3.0 - 2.0 * sd)).abs() < EPS);
        assert!((band.upper - (3.0 + 2.0 * sd)).abs() < EPS);
        assert!(band.contains(3.0));
        assert!(!band.contains(6.0));
    }

    #[test]
    fn test_sigma_band_flags_spike() {
        let band = SigmaBand::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], 2.0).unwrap();
        assert!(!band.contains(100.0));
        assert!(band.contains(1.0));
    }

    #[test]
    fn test_sigma_band_rejects_bad_k() {
        assert!(SigmaBand::new(&[1.0, 2.0], 0.0).is_err());
    }

    #[test]
    fn test_fences_boxplot() {
        let fences = Fences::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], 1.5).unwrap();
        assert!((fences.iqr() - 2.5).abs() < EPS);
        assert!((fences.lower - -1.5).abs() < EPS);
        assert!((fences.upper - 8.5).abs() < EPS);
        assert!(!fences.contains(100.0));
        assert!(fences.contains(1.0));
    }

    #[test]
    fn test_fences_within_group() {
        // Group B of the category boxplot: 100 is only an outlier relative to its own group.
        let group_a = Fences::new(&[1.0, 2.0, 3.0, 4.0], 1.5).unwrap();
        let group_b = Fences::new(&[10.0, 11.0, 12.0, 100.0], 1.5).unwrap();
        assert!(group_a.contains(2.5));
        assert!(!group_b.contains(100.0));
        assert!(group_b.contains(10.0));
    }

    #[test]
    fn test_free_functions_match_constructors() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        assert_eq!(sigma_band(&data, 2.0).unwrap(), SigmaBand::new(&data, 2.0).unwrap());
        assert_eq!(tukey_fences(&data, 1.5).unwrap(), Fences::new(&data, 1.5).unwrap());
    }

    #[test]
    fn test_rescaled_leaves_ordinary_values_alone() {
        let data = [1.0, -2.5, 1e150];
        let (scaled, factor) = rescaled(&data);
        assert_eq!(factor, 1.0);
        assert_eq!(&scaled[..], &data[..]);
    }

    #[test]
    fn test_statistics_near_f64_limits() {
        let data = [1e308, 1e308, 0.0];
        assert!((mean(&data).unwrap() / (1e308 / 3.0 * 2.0) - 1.0).abs() < EPS);
        let expected_sd = 1e308 * (2.0_f64 / 9.0).sqrt();
        assert!((std_dev(&data).unwrap() / expected_sd - 1.0).abs() < 1e-9);

        let data = [1.5e308, 1.5e308, -1.5e308, 1e308, 0.0];
        assert_eq!(median(&data).unwrap(), 1e308);
        assert!((median_absolute_deviation(&data).unwrap() / 0.5e308 - 1.0).abs() < EPS);

        let even = [1.5e308, 1.7e308];
        assert!((median(&even).unwrap() / 1.6e308 - 1.0).abs() < EPS);
    }

    #[test]
    fn test_bands_near_f64_limits() {
        let band = sigma_band(&[1e200, -1e200, 0.0, 5.0], 2.0).unwrap();
        assert!(band.std_dev.is_finite());
        assert!(band.contains(1e200));

        let fences = tukey_fences(&[-1.5e308, 0.0, 1.5e308], 0.5).unwrap();
        assert!(fences.iqr().is_finite());
        assert!(fences.contains(0.0));
    }
}
