//! Outlier Detection Facade
//!
//! Unified re-exports for the outlier detection module.
//!
//! This facade provides a single entry point to all outlier detection functionality:
//! - `OutlierDetector` trait, `OutlierError` and data models from SPI
//! - Configuration types from API
//! - Scoring functions, detectors, method comparison and scenarios from Core

// Re-export everything from SPI
pub use outlier_spi::*;

// Re-export everything from API
pub use outlier_api::*;

// Re-export everything from Core
pub use outlier_core::*;
