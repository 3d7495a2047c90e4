//! Seeded synthetic sample sets for the masking and swamping demonstrations.
//!
//! Generators take the random source as an argument so the same config and
//! seed always reproduce the same samples.

use outlier_api::{MaskingScenarioConfig, SwampingScenarioConfig};
use outlier_spi::{LabeledSamples, OutlierError, PointKind, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::debug;

fn normal(name: &str, mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std_dev).map_err(|e| OutlierError::invalid_parameter(name, e.to_string()))
}

/// Normal draws followed by the planted moderate and extreme values.
pub fn masking_samples<R: Rng + ?Sized>(
    config: &MaskingScenarioConfig,
    rng: &mut R,
) -> Result<LabeledSamples> {
    config.validate()?;
    let dist = normal("normal_std_dev", config.normal_mean, config.normal_std_dev)?;

    let mut samples = LabeledSamples::with_capacity(config.total_len());
    for _ in 0..config.normal_count {
        samples.push(dist.sample(rng), PointKind::Normal);
    }
    for &value in &config.moderate {
        samples.push(value, PointKind::Moderate);
    }
    for &value in &config.extreme {
        samples.push(value, PointKind::Extreme);
    }
    debug!(n = samples.len(), "generated masking samples");
    Ok(samples)
}

/// One normal cluster per center, followed by the extreme values.
pub fn swamping_samples<R: Rng + ?Sized>(
    config: &SwampingScenarioConfig,
    rng: &mut R,
) -> Result<LabeledSamples> {
    config.validate()?;

    let mut samples = LabeledSamples::with_capacity(config.total_len());
    for &center in &config.cluster_centers {
        let dist = normal("cluster_std_dev", center, config.cluster_std_dev)?;
        for _ in 0..config.cluster_size {
            samples.push(dist.sample(rng), PointKind::Normal);
        }
    }
    for &value in &config.extreme {
        samples.push(value, PointKind::Extreme);
    }
    debug!(n = samples.len(), "generated swamping samples");
    Ok(samples)
}

/// Masking samples from a generator seeded with `config.seed`.
pub fn generate_masking(config: &MaskingScenarioConfig) -> Result<LabeledSamples> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    masking_samples(config, &mut rng)
}

/// Swamping samples from a generator seeded with `config.seed`.
pub fn generate_swamping(config: &SwampingScenarioConfig) -> Result<LabeledSamples> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    swamping_samples(config, &mut rng)
}
