//! Masking and swamping walkthrough
//!
//! Run with: cargo run --example masking_swamping -p outlier

use outlier::prelude::*;
use outlier::{generate_masking, generate_swamping, MaskingScenarioConfig, SwampingScenarioConfig};

fn format_values(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{:.2}", v)).collect();
    format!("[{}]", parts.join(", "))
}

fn main() -> Result<()> {
    println!("=== outlier: masking and swamping ===\n");

    // 1. Masking
    let masking = MaskingScenarioConfig::default();
    let samples = generate_masking(&masking)?;
    let comparison = compare_methods(&samples.values, 2.0)?;

    println!("1. Masking (seed={}, threshold=2.0)", masking.seed);
    println!(
        "   Z-score outliers: {}",
        format_values(&comparison.naive.outlier_values(&samples.values))
    );
    println!(
        "   MAD outliers:     {}",
        format_values(&comparison.robust.outlier_values(&samples.values))
    );
    let masked: Vec<f64> = comparison
        .masked()
        .iter()
        .map(|&i| samples.values[i])
        .collect();
    println!(
        "   Missed by z-score due to {:?}: {}\n",
        masking.extreme,
        format_values(&masked)
    );

    // 2. Swamping
    let swamping = SwampingScenarioConfig::default();
    let samples = generate_swamping(&swamping)?;
    let comparison = compare_methods(&samples.values, 2.0)?;

    println!("2. Swamping (seed={}, threshold=2.0)", swamping.seed);
    println!(
        "   Z-score outliers: {} points",
        comparison.naive.outlier_count()
    );
    println!(
        "   MAD outliers:     {} points",
        comparison.robust.outlier_count()
    );
    println!(
        "   Flagged by z-score only: {}",
        format_values(
            &comparison
                .swamped()
                .iter()
                .map(|&i| samples.values[i])
                .collect::<Vec<_>>()
        )
    );

    println!("\n=== Done ===");
    Ok(())
}
