//! Scoring methods and the spread estimates they divide by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OutlierError;

/// Outlier scoring method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Distance from the mean in population standard deviations.
    #[serde(alias = "zscore")]
    ZScore,
    /// 0.6745 × distance from the median in median absolute deviations.
    #[serde(alias = "mad", alias = "modified-zscore")]
    ModifiedZScore,
    /// Distance beyond the quartiles in interquartile ranges.
    Iqr,
}

impl Method {
    /// Every supported method.
    pub const ALL: [Method; 3] = [Method::ZScore, Method::ModifiedZScore, Method::Iqr];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::ZScore => "z-score",
            Method::ModifiedZScore => "modified-z-score",
            Method::Iqr => "iqr",
        }
    }

    /// Spread estimate the method's scores are scaled by.
    pub fn dispersion(&self) -> Dispersion {
        match self {
            Method::ZScore => Dispersion::StandardDeviation,
            Method::ModifiedZScore => Dispersion::MedianAbsoluteDeviation,
            Method::Iqr => Dispersion::InterquartileRange,
        }
    }

    /// Whether the method resists a minority of extreme values.
    pub fn is_robust(&self) -> bool {
        !matches!(self, Method::ZScore)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = OutlierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zscore" | "z-score" | "z_score" => Ok(Method::ZScore),
            "mad" | "modified-zscore" | "modified-z-score" | "modified_z_score" => {
                Ok(Method::ModifiedZScore)
            }
            "iqr" => Ok(Method::Iqr),
            other => Err(OutlierError::invalid_parameter(
                "method",
                format!("unknown method '{}', use 'zscore', 'mad' or 'iqr'", other),
            )),
        }
    }
}

/// Spread estimate whose zero value makes a score undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dispersion {
    StandardDeviation,
    MedianAbsoluteDeviation,
    InterquartileRange,
}

impl fmt::Display for Dispersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dispersion::StandardDeviation => "standard deviation",
            Dispersion::MedianAbsoluteDeviation => "median absolute deviation",
            Dispersion::InterquartileRange => "interquartile range",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_spellings() {
        assert_eq!("zscore".parse::<Method>().unwrap(), Method::ZScore);
        assert_eq!("Z-Score".parse::<Method>().unwrap(), Method::ZScore);
        assert_eq!("mad".parse::<Method>().unwrap(), Method::ModifiedZScore);
        assert_eq!(
            "modified-zscore".parse::<Method>().unwrap(),
            Method::ModifiedZScore
        );
        assert_eq!(" iqr ".parse::<Method>().unwrap(), Method::Iqr);
    }

    #[test]
    fn test_parse_unknown_method() {
        let err = "lof".parse::<Method>().unwrap_err();
        assert!(matches!(err, OutlierError::InvalidParameter { ref name, .. } if name == "method"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn test_dispersion_per_method() {
        assert_eq!(Method::ZScore.dispersion(), Dispersion::StandardDeviation);
        assert_eq!(
            Method::ModifiedZScore.dispersion(),
            Dispersion::MedianAbsoluteDeviation
        );
        assert_eq!(Method::Iqr.dispersion(), Dispersion::InterquartileRange);
    }

    #[test]
    fn test_robustness() {
        assert!(!Method::ZScore.is_robust());
        assert!(Method::ModifiedZScore.is_robust());
        assert!(Method::Iqr.is_robust());
    }
}
