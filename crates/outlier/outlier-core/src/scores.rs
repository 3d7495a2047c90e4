//! Per-point outlier scores and threshold classification.
//!
//! The z-score uses the mean and population standard deviation; a few
//! extreme values inflate both, hiding moderate outliers (masking). The
//! modified z-score uses the median and the median absolute deviation,
//! which have a 50% breakdown point and are not pulled by a minority of
//! extreme values.

use outlier_api::validate_threshold;
use outlier_spi::{DegeneratePolicy, Dispersion, OutlierError, Result};
use tracing::{debug, warn};

use crate::stats;

/// Scales the MAD to the standard deviation of a normal distribution.
pub const MODIFIED_Z_SCALE: f64 = 0.6745;

/// Standard z-scores, failing on zero standard deviation.
pub fn compute_z_scores(samples: &[f64]) -> Result<Vec<f64>> {
    compute_z_scores_with(samples, DegeneratePolicy::Reject)
}

/// Standard z-scores: `(x - mean) / std_dev`, population standard deviation.
pub fn compute_z_scores_with(samples: &[f64], policy: DegeneratePolicy) -> Result<Vec<f64>> {
    stats::validate_samples(samples)?;
    let (scaled, factor) = stats::rescaled(samples);
    let mean = stats::mean_of(&scaled);
    let std_dev = stats::std_dev_of(&scaled, mean);
    // Rounding in the mean can leave a tiny non-zero spread for identical values.
    let degenerate = std_dev == 0.0 || stats::is_constant(samples);
    check_spread(degenerate, Dispersion::StandardDeviation, policy)?;
    debug!(
        n = samples.len(),
        mean = mean / factor,
        std_dev = std_dev / factor,
        "z-score statistics"
    );

    let scores = scaled.iter().map(|&x| (x - mean) / std_dev).collect();
    if degenerate {
        return Ok(scores);
    }
    check_finite("mean", &[mean])?;
    check_finite("standard deviation", &[std_dev])?;
    check_finite("z-score", &scores)?;
    Ok(scores)
}

/// Modified z-scores, failing on zero MAD.
pub fn compute_modified_z_scores(samples: &[f64]) -> Result<Vec<f64>> {
    compute_modified_z_scores_with(samples, DegeneratePolicy::Reject)
}

/// Modified z-scores: `0.6745 * (x - median) / MAD`.
pub fn compute_modified_z_scores_with(
    samples: &[f64],
    policy: DegeneratePolicy,
) -> Result<Vec<f64>> {
    stats::validate_samples(samples)?;
    let (scaled, factor) = stats::rescaled(samples);
    let median = stats::median_of(&scaled);
    let mad = stats::mad_of(&scaled, median);
    check_spread(mad == 0.0, Dispersion::MedianAbsoluteDeviation, policy)?;
    debug!(
        n = samples.len(),
        median = median / factor,
        mad = mad / factor,
        "modified z-score statistics"
    );

    let scores = scaled
        .iter()
        .map(|&x| MODIFIED_Z_SCALE * (x - median) / mad)
        .collect();
    if mad == 0.0 {
        return Ok(scores);
    }
    check_finite("median", &[median])?;
    check_finite("median absolute deviation", &[mad])?;
    check_finite("modified z-score", &scores)?;
    Ok(scores)
}

/// IQR scores, failing on zero interquartile range.
pub fn compute_iqr_scores(samples: &[f64]) -> Result<Vec<f64>> {
    compute_iqr_scores_with(samples, DegeneratePolicy::Reject)
}

/// Signed distance beyond the nearest quartile in IQR units; zero between
/// the quartiles. `|score| > k` means outside the Tukey fences for `k`.
pub fn compute_iqr_scores_with(samples: &[f64], policy: DegeneratePolicy) -> Result<Vec<f64>> {
    stats::validate_samples(samples)?;
    let (scaled, factor) = stats::rescaled(samples);
    let (q1, q3) = stats::quartiles_of(&scaled);
    let iqr = q3 - q1;
    check_spread(iqr == 0.0, Dispersion::InterquartileRange, policy)?;
    debug!(
        n = samples.len(),
        q1 = q1 / factor,
        q3 = q3 / factor,
        iqr = iqr / factor,
        "iqr statistics"
    );

    let scores = scaled
        .iter()
        .map(|&x| {
            if x < q1 {
                (x - q1) / iqr
            } else if x > q3 {
                (x - q3) / iqr
            } else {
                0.0
            }
        })
        .collect();
    if iqr == 0.0 {
        return Ok(scores);
    }
    check_finite("interquartile range", &[iqr])?;
    check_finite("iqr score", &scores)?;
    Ok(scores)
}

/// Indices whose absolute score strictly exceeds `threshold`, ascending.
///
/// A score equal to the threshold is not an outlier. `NaN` scores never
/// qualify; infinite scores always do.
pub fn classify(scores: &[f64], threshold: f64) -> Result<Vec<usize>> {
    validate_threshold("threshold", threshold)?;
    Ok(scores
        .iter()
        .enumerate()
        .filter_map(|(i, s)| if s.abs() > threshold { Some(i) } else { None })
        .collect())
}

fn check_spread(degenerate: bool, measure: Dispersion, policy: DegeneratePolicy) -> Result<()> {
    if !degenerate {
        return Ok(());
    }
    match policy {
        DegeneratePolicy::Reject => Err(OutlierError::DegenerateInput { measure }),
        DegeneratePolicy::Propagate => {
            warn!(%measure, "zero spread, scores will not be finite");
            Ok(())
        }
    }
}

/// A non-zero spread must give finite statistics and scores.
fn check_finite(quantity: &str, values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(OutlierError::Overflow {
            quantity: quantity.to_string(),
        })
    }
}
