//! Handling of zero-spread inputs.

use serde::{Deserialize, Serialize};

/// What to do when the spread estimate of a sample set is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Fail with `OutlierError::DegenerateInput`.
    #[default]
    Reject,
    /// Divide anyway, yielding `±inf` or `NaN` scores as plain
    /// floating-point arithmetic does.
    Propagate,
}
