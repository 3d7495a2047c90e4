//! Generated sample sets with per-point provenance.

use serde::{Deserialize, Serialize};

/// How a generated point was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    /// Drawn from one of the in-distribution clusters.
    Normal,
    /// Planted moderately far from the bulk.
    Moderate,
    /// Planted far from the bulk.
    Extreme,
}

/// Sample values with a parallel label for each point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabeledSamples {
    pub values: Vec<f64>,
    pub kinds: Vec<PointKind>,
}

impl LabeledSamples {
    /// Create an empty set with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            kinds: Vec::with_capacity(capacity),
        }
    }

    /// Append one labeled point.
    pub fn push(&mut self, value: f64, kind: PointKind) {
        self.values.push(value);
        self.kinds.push(kind);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Indices of every point with the given label, ascending.
    pub fn indices_of(&self, kind: PointKind) -> Vec<usize> {
        self.kinds
            .iter()
            .enumerate()
            .filter_map(|(i, &k)| if k == kind { Some(i) } else { None })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_labels_parallel() {
        let mut samples = LabeledSamples::with_capacity(3);
        samples.push(0.2, PointKind::Normal);
        samples.push(3.5, PointKind::Moderate);
        samples.push(15.0, PointKind::Extreme);

        assert_eq!(samples.len(), 3);
        assert_eq!(samples.values, vec![0.2, 3.5, 15.0]);
        assert_eq!(samples.indices_of(PointKind::Moderate), vec![1]);
        assert_eq!(samples.indices_of(PointKind::Extreme), vec![2]);
    }

    #[test]
    fn test_default_is_empty() {
        let samples = LabeledSamples::default();
        assert!(samples.is_empty());
        assert!(samples.indices_of(PointKind::Normal).is_empty());
    }
}
