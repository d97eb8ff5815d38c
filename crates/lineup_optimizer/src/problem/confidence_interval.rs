use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Relative margin applied when the scoring provider does not report its own interval.
pub const DEFAULT_UNCERTAINTY: f64 = 0.15;

/// Interval around a predicted score. Reported alongside a lineup, never used for selection.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lo: f64,
    pub hi: f64,
}

impl ConfidenceInterval {
    pub fn new(lo: f64, hi: f64) -> Self {
        ConfidenceInterval { lo, hi }
    }

    /// `score ± |score| * uncertainty`, lower end clamped at zero.
    pub fn from_uncertainty(score: f64, uncertainty: f64) -> Self {
        let margin = score.abs() * uncertainty.abs();
        ConfidenceInterval {
            lo: (score - margin).max(0.0),
            hi: score + margin,
        }
    }
}
