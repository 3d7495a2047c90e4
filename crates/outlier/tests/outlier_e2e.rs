//! End-to-end tests for outlier crate
//!
//! Runs the masking and swamping demonstrations on seeded synthetic data.

use outlier::prelude::*;
use outlier::{
    generate_masking, generate_swamping, MaskingScenarioConfig, PointKind, SwampingScenarioConfig,
};

#[test]
fn e2e_masking_zscore_misses_moderate_outliers() {
    for seed in [42, 0, 1, 7, 2024] {
        let samples = generate_masking(&MaskingScenarioConfig::with_seed(seed)).unwrap();
        let moderate = samples.indices_of(PointKind::Moderate);

        let comparison = compare_methods(&samples.values, 2.0).unwrap();

        assert!(
            !moderate.iter().all(|&i| comparison.naive.is_outlier(i)),
            "seed {}: z-score flagged every moderate outlier",
            seed
        );
        assert!(
            moderate.iter().all(|&i| comparison.robust.is_outlier(i)),
            "seed {}: modified z-score missed a moderate outlier",
            seed
        );
        for i in moderate {
            assert!(comparison.masked().contains(&i));
        }
    }
}

#[test]
fn e2e_masking_both_methods_flag_extremes() {
    let samples = generate_masking(&MaskingScenarioConfig::default()).unwrap();
    let comparison = compare_methods(&samples.values, 2.0).unwrap();
    for i in samples.indices_of(PointKind::Extreme) {
        assert!(comparison.naive.is_outlier(i));
        assert!(comparison.robust.is_outlier(i));
    }
}

#[test]
fn e2e_masking_disappears_without_extremes() {
    let config = MaskingScenarioConfig {
        extreme: Vec::new(),
        ..MaskingScenarioConfig::default()
    };
    let samples = generate_masking(&config).unwrap();
    let result = ZScoreDetector::new(2.0)
        .unwrap()
        .detect(&samples.values)
        .unwrap();
    for i in samples.indices_of(PointKind::Moderate) {
        assert!(result.is_outlier(i), "moderate outlier {} hidden", i);
    }
}

#[test]
fn e2e_swamping_robust_flags_only_extreme() {
    let samples = generate_swamping(&SwampingScenarioConfig::default()).unwrap();
    let extreme = samples.indices_of(PointKind::Extreme);

    let robust = ModifiedZScoreDetector::new(2.0)
        .unwrap()
        .detect(&samples.values)
        .unwrap();
    assert_eq!(robust.outliers, extreme);
    assert_eq!(robust.outlier_values(&samples.values), vec![20.0]);
}

#[test]
fn e2e_swamping_extreme_inflates_spread() {
    let samples = generate_swamping(&SwampingScenarioConfig::default()).unwrap();
    let extreme = samples.indices_of(PointKind::Extreme);

    let with_extreme = outlier::stats::std_dev(&samples.values).unwrap();
    let clusters: Vec<f64> = samples
        .indices_of(PointKind::Normal)
        .into_iter()
        .map(|i| samples.values[i])
        .collect();
    let clusters_only = outlier::stats::std_dev(&clusters).unwrap();
    assert!(with_extreme > clusters_only * 1.1);

    // The inflated spread keeps every in-cluster point well inside two sigma,
    // so on this layout the z-score flags the extreme value and nothing else.
    let naive = ZScoreDetector::new(2.0)
        .unwrap()
        .detect(&samples.values)
        .unwrap();
    assert_eq!(naive.outliers, extreme);
    let comparison = compare_methods(&samples.values, 2.0).unwrap();
    assert!(comparison.swamped().is_empty());
    assert!(comparison.is_consistent());
}

#[test]
fn e2e_detection_result_workflow() {
    let samples = generate_masking(&MaskingScenarioConfig::default()).unwrap();
    let detector = mad_detector_from_json();
    let result = detector.detect(&samples.values).unwrap();

    assert_eq!(result.scores.len(), samples.len());
    assert_eq!(result.mask().iter().filter(|&&b| b).count(), result.outlier_count());
    let values = result.outlier_values(&samples.values);
    assert!(values.contains(&15.0));
    assert!(values.contains(&16.0));
}

fn mad_detector_from_json() -> Box<dyn OutlierDetector> {
    let config = DetectorConfig::from_json(r#"{"method": "mad", "threshold": 2.0}"#).unwrap();
    outlier::build_detector(&config).unwrap()
}
