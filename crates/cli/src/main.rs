//! # outlier-cli
//!
//! Command-line interface for the outlier detection library.

use clap::{Parser, Subcommand, ValueEnum};
use outlier::{
    build_detector, compare_methods, generate_masking, generate_swamping, DegeneratePolicy,
    DetectionResult, DetectorConfig, LabeledSamples, MaskingScenarioConfig, Method,
    MethodComparison, SwampingScenarioConfig,
};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "outlier-cli")]
#[command(about = "Z-score, modified z-score and IQR outlier detection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the samples come from.
#[derive(clap::Args)]
struct SampleSource {
    /// Input file (CSV or JSON)
    #[arg(short, long, conflicts_with = "values")]
    input: Option<PathBuf>,

    /// Comma-separated sample values
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Vec<f64>,

    /// Column name or index for sample values
    #[arg(short, long)]
    column: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScenarioKind {
    Masking,
    Swamping,
}

#[derive(Subcommand)]
enum Commands {
    /// Score samples and list the outliers
    Detect {
        #[command(flatten)]
        source: SampleSource,

        /// Detection method (zscore, mad, iqr)
        #[arg(short, long, default_value = "zscore")]
        method: String,

        /// Threshold on the absolute score (fence multiplier for iqr)
        #[arg(short, long, default_value = "3.0")]
        threshold: f64,

        /// Produce inf/NaN scores instead of failing on zero spread
        #[arg(long)]
        propagate_degenerate: bool,

        /// Detector configuration (JSON); replaces method, threshold and policy flags
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare z-score and modified z-score detection on the same samples
    Compare {
        #[command(flatten)]
        source: SampleSource,

        /// Threshold for both methods
        #[arg(short, long, default_value = "2.0")]
        threshold: f64,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a seeded masking or swamping sample set and compare methods
    Scenario {
        #[arg(value_enum)]
        kind: ScenarioKind,

        /// Random seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Threshold for both methods
        #[arg(short, long, default_value = "2.0")]
        threshold: f64,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Load sample values from a CSV file
fn load_csv_data(path: &Path, column: Option<&str>) -> CliResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    let col_idx = match column {
        Some(col) => match col.parse::<usize>() {
            Ok(idx) => idx,
            Err(_) => headers
                .iter()
                .position(|h| h == col)
                .ok_or_else(|| format!("Column '{}' not found", col))?,
        },
        None => 0,
    };

    let mut data = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        if let Some(value) = record.get(col_idx) {
            if let Ok(num) = value.trim().parse::<f64>() {
                data.push(num);
            }
        }
    }

    if data.is_empty() {
        return Err("No numeric data found in the specified column".to_string());
    }
    Ok(data)
}

/// Load sample values from a JSON file
fn load_json_data(path: &Path, column: Option<&str>) -> CliResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;

    // Array of numbers, or array of objects keyed by column
    if let Some(arr) = json.as_array() {
        if arr.iter().all(|v| v.is_number()) {
            return Ok(arr.iter().filter_map(|v| v.as_f64()).collect());
        }

        let keys: Vec<&str> = match column {
            Some(col) => vec![col],
            None => vec!["value", "values", "data", "y"],
        };
        for key in keys {
            let data: Vec<f64> = arr
                .iter()
                .filter_map(|obj| obj.get(key).and_then(|v| v.as_f64()))
                .collect();
            if !data.is_empty() {
                return Ok(data);
            }
        }
    }

    // Object holding a data array
    if let Some(obj) = json.as_object() {
        for key in ["data", "values", "samples", "y"] {
            if let Some(arr) = obj.get(key).and_then(|v| v.as_array()) {
                let data: Vec<f64> = arr.iter().filter_map(|v| v.as_f64()).collect();
                if !data.is_empty() {
                    return Ok(data);
                }
            }
        }
    }

    Err("Could not extract numeric data from JSON".to_string())
}

/// Load data from file (auto-detect format)
fn load_data(path: &Path, column: Option<&str>) -> CliResult<Vec<f64>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => load_csv_data(path, column),
        "json" => load_json_data(path, column),
        _ => load_csv_data(path, column).or_else(|_| load_json_data(path, column)),
    }
}

fn load_samples(source: &SampleSource) -> CliResult<Vec<f64>> {
    let data = match &source.input {
        Some(path) => {
            let data = load_data(path, source.column.as_deref())?;
            info!(count = data.len(), path = %path.display(), "loaded samples");
            data
        }
        None if !source.values.is_empty() => source.values.clone(),
        None => return Err("Provide samples with --input or --values".to_string()),
    };
    Ok(data)
}

/// Write JSON results to a file
fn write_json(value: &serde_json::Value, output: Option<&PathBuf>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, value)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("\nResults written to {:?}", path);
    }
    Ok(())
}

fn detection_json(result: &DetectionResult, data: &[f64]) -> serde_json::Value {
    serde_json::json!({
        "method": result.method,
        "threshold": result.threshold,
        "total_points": data.len(),
        "outlier_count": result.outlier_count(),
        "outlier_indices": result.outliers,
        "outliers": result.outliers.iter().map(|&i| {
            serde_json::json!({
                "index": i,
                "value": data[i],
                "score": result.scores[i]
            })
        }).collect::<Vec<_>>()
    })
}

fn comparison_json(comparison: &MethodComparison, data: &[f64]) -> serde_json::Value {
    serde_json::json!({
        "threshold": comparison.naive.threshold,
        "total_points": data.len(),
        "zscore": detection_json(&comparison.naive, data),
        "modified_zscore": detection_json(&comparison.robust, data),
        "masked_indices": comparison.masked(),
        "swamped_indices": comparison.swamped(),
    })
}

fn resolve_config(
    method: &str,
    threshold: f64,
    propagate_degenerate: bool,
    config: Option<&Path>,
) -> CliResult<DetectorConfig> {
    if let Some(path) = config {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {:?}: {}", path, e))?;
        return DetectorConfig::from_json(&json).map_err(|e| e.to_string());
    }

    let method: Method = method.parse().map_err(|e: outlier::OutlierError| e.to_string())?;
    let degenerate = if propagate_degenerate {
        DegeneratePolicy::Propagate
    } else {
        DegeneratePolicy::Reject
    };
    Ok(DetectorConfig::new(method, threshold).with_degenerate(degenerate))
}

fn print_values(label: &str, indices: &[usize], data: &[f64]) {
    let values: Vec<String> = indices.iter().map(|&i| format!("{:.4}", data[i])).collect();
    println!("{}: [{}]", label, values.join(", "));
}

fn print_comparison(comparison: &MethodComparison, data: &[f64]) {
    print_values("Z-score outliers", &comparison.naive.outliers, data);
    print_values("MAD outliers", &comparison.robust.outliers, data);
    println!(
        "Z-score: {} points, MAD: {} points",
        comparison.naive.outlier_count(),
        comparison.robust.outlier_count()
    );
    print_values("Missed by z-score (masking)", &comparison.masked(), data);
    print_values("Flagged by z-score only (swamping)", &comparison.swamped(), data);
}

/// Run detect command
fn run_detect(
    source: SampleSource,
    method: String,
    threshold: f64,
    propagate_degenerate: bool,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let data = load_samples(&source)?;
    let config = resolve_config(&method, threshold, propagate_degenerate, config.as_deref())?;
    debug!(?config, "detector configuration");

    let detector = build_detector(&config).map_err(|e| e.to_string())?;
    let result = detector.detect(&data).map_err(|e| e.to_string())?;

    println!("Detection method: {}", result.method);
    println!("Threshold: {}", result.threshold);
    println!("Outliers found: {}", result.outlier_count());

    if !result.outliers.is_empty() {
        println!("\nOutlier details:");
        for &idx in &result.outliers {
            println!(
                "  Index {}: value={:.4}, score={:.4}",
                idx, data[idx], result.scores[idx]
            );
        }
    }

    write_json(&detection_json(&result, &data), output.as_ref())
}

/// Run compare command
fn run_compare(source: SampleSource, threshold: f64, output: Option<PathBuf>) -> CliResult<()> {
    let data = load_samples(&source)?;
    let comparison = compare_methods(&data, threshold).map_err(|e| e.to_string())?;

    println!("Threshold: {}", threshold);
    print_comparison(&comparison, &data);
    write_json(&comparison_json(&comparison, &data), output.as_ref())
}

fn scenario_samples(kind: ScenarioKind, seed: u64) -> CliResult<LabeledSamples> {
    let samples = match kind {
        ScenarioKind::Masking => generate_masking(&MaskingScenarioConfig::with_seed(seed)),
        ScenarioKind::Swamping => generate_swamping(&SwampingScenarioConfig::with_seed(seed)),
    };
    samples.map_err(|e| e.to_string())
}

/// Run scenario command
fn run_scenario(
    kind: ScenarioKind,
    seed: u64,
    threshold: f64,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let samples = scenario_samples(kind, seed)?;
    info!(count = samples.len(), seed, "generated scenario samples");
    let comparison = compare_methods(&samples.values, threshold).map_err(|e| e.to_string())?;

    let name = match kind {
        ScenarioKind::Masking => "masking",
        ScenarioKind::Swamping => "swamping",
    };
    println!("Scenario: {} (seed={}, threshold={})", name, seed, threshold);
    print_comparison(&comparison, &samples.values);

    let mut json = comparison_json(&comparison, &samples.values);
    json["scenario"] = serde_json::json!(name);
    json["seed"] = serde_json::json!(seed);
    json["samples"] = serde_json::json!(samples);
    write_json(&json, output.as_ref())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "outlier_cli=info,outlier_core=info".into()),
        )
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Detect {
            source,
            method,
            threshold,
            propagate_degenerate,
            config,
            output,
        } => run_detect(source, method, threshold, propagate_degenerate, config, output),

        Commands::Compare {
            source,
            threshold,
            output,
        } => run_compare(source, threshold, output),

        Commands::Scenario {
            kind,
            seed,
            threshold,
            output,
        } => run_scenario(kind, seed, threshold, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
