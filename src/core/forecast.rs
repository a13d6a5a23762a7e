//! Partitioned Holt-Winters output.

use serde::{Deserialize, Serialize};

/// Holt-Winters output split into its in-sample and out-of-sample parts.
///
/// `smoothed` has one entry per observation; `predictions` has one entry per
/// forecast step. Concatenated, they equal the interleaved output of
/// [`holt_winters`](crate::models::exponential::holt_winters).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoltWintersForecast {
    /// In-sample smoothed values, one per observation.
    smoothed: Vec<f64>,
    /// Out-of-sample forecasts, one per step of the horizon.
    predictions: Vec<f64>,
}

impl HoltWintersForecast {
    /// Create an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already separated parts.
    pub fn from_parts(smoothed: Vec<f64>, predictions: Vec<f64>) -> Self {
        Self {
            smoothed,
            predictions,
        }
    }

    /// Split a combined series after the first `n` in-sample values.
    ///
    /// If `n` exceeds the series length, everything is treated as in-sample.
    pub fn split_combined(mut combined: Vec<f64>, n: usize) -> Self {
        let predictions = combined.split_off(n.min(combined.len()));
        Self {
            smoothed: combined,
            predictions,
        }
    }

    /// In-sample smoothed values.
    pub fn smoothed(&self) -> &[f64] {
        &self.smoothed
    }

    /// Out-of-sample forecasts.
    pub fn predictions(&self) -> &[f64] {
        &self.predictions
    }

    /// Number of forecast steps.
    pub fn horizon(&self) -> usize {
        self.predictions.len()
    }

    /// Total number of values across both parts.
    pub fn len(&self) -> usize {
        self.smoothed.len() + self.predictions.len()
    }

    /// Check if both parts are empty.
    pub fn is_empty(&self) -> bool {
        self.smoothed.is_empty() && self.predictions.is_empty()
    }

    /// Concatenate smoothed values and forecasts into one series.
    pub fn into_combined(self) -> Vec<f64> {
        let mut combined = self.smoothed;
        combined.extend(self.predictions);
        combined
    }

    /// Take ownership of `(smoothed, predictions)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.smoothed, self.predictions)
    }
}
