//! Outlier Detection Core
//!
//! Score computation, classification, detectors, method comparison and
//! seeded scenario generation.

mod comparison;
mod detectors;
mod scenario;
mod scores;
pub mod stats;

pub use comparison::*;
pub use detectors::*;
pub use scenario::*;
pub use scores::*;
pub use stats::{sigma_band, tukey_fences, Fences, SigmaBand};
