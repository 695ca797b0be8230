//! Three-tier color classification for KPI cards and gauges.
//!
//! Low values are alarming (red), mid-range values need attention (yellow),
//! high values are healthy (green). Bounds are inclusive, so a value sitting
//! exactly on a threshold lands in the stricter bucket.

use crate::utils::config::{DEFAULT_LOW_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Abstract color bucket, mapped to a display color by presentation code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Red,
    Yellow,
    Green,
}

impl ColorToken {
    /// Display color used by the dashboard for this token
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Red => "#ef4444",
            ColorToken::Yellow => "#eab308",
            ColorToken::Green => "#22c55e",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Red => "red",
            ColorToken::Yellow => "yellow",
            ColorToken::Green => "green",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive upper bounds of the red and yellow buckets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub low: f64,
    pub medium: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW_THRESHOLD,
            medium: DEFAULT_MEDIUM_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn new(low: f64, medium: f64) -> Self {
        Self { low, medium }
    }

    /// Check that the bounds are ordered
    pub fn is_ordered(&self) -> bool {
        self.low <= self.medium
    }
}

/// Classify a value into a color bucket
///
/// **Public** - total over all floats; NaN fails both comparisons and lands in green
pub fn color_bucket(value: f64, thresholds: &Thresholds) -> ColorToken {
    if value <= thresholds.low {
        ColorToken::Red
    } else if value <= thresholds.medium {
        ColorToken::Yellow
    } else {
        ColorToken::Green
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_bucket_boundaries() {
        let t = Thresholds::default();
        assert_eq!(color_bucket(30.0, &t), ColorToken::Red);
        assert_eq!(color_bucket(30.0001, &t), ColorToken::Yellow);
        assert_eq!(color_bucket(70.0, &t), ColorToken::Yellow);
        assert_eq!(color_bucket(70.0001, &t), ColorToken::Green);
    }

    #[test]
    fn test_color_bucket_extremes() {
        let t = Thresholds::default();
        assert_eq!(color_bucket(f64::NEG_INFINITY, &t), ColorToken::Red);
        assert_eq!(color_bucket(-5.0, &t), ColorToken::Red);
        assert_eq!(color_bucket(f64::INFINITY, &t), ColorToken::Green);
        assert_eq!(color_bucket(f64::NAN, &t), ColorToken::Green);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = Thresholds::new(50.0, 90.0);
        assert_eq!(color_bucket(60.0, &t), ColorToken::Yellow);
        assert_eq!(color_bucket(95.0, &t), ColorToken::Green);
        assert!(t.is_ordered());
        assert!(!Thresholds::new(10.0, 5.0).is_ordered());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(ColorToken::Yellow.to_string(), "yellow");
        assert_eq!(ColorToken::Red.hex(), "#ef4444");
    }
}
