//! Contract definitions for outlier detection.
//!
//! This module contains trait definitions that detectors must implement.

mod outlier_detector;

pub use outlier_detector::OutlierDetector;
