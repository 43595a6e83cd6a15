//! Robust normalization bounds from low/high percentiles.

use serde::{Deserialize, Serialize};

/// Nearest-rank-below percentile of an ascending slice.
///
/// Returns the element at `floor(p / 100 * (n - 1))`, or `0` when `sorted`
/// is empty.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((p / 100.0) * (sorted.len() - 1) as f64).floor() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Pressure bounds used to map raw pressure into `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PressureRange {
    pub min: f64,
    pub max: f64,
}

impl PressureRange {
    /// Bounds at percentiles `low` and `high` of `samples` (order irrelevant).
    pub fn from_samples(samples: &[f64], low: f64, high: f64) -> Self {
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self {
            min: percentile(&sorted, low),
            max: percentile(&sorted, high),
        }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp `(pressure - min) / span` into `[0, 1]`; `0` for a degenerate span.
    #[inline]
    pub fn normalize(&self, pressure: f64) -> f64 {
        let span = self.span();
        if span > 0.0 {
            ((pressure - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
