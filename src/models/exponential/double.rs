//! Double exponential smoothing.
//!
//! Level plus trend. Unlike single smoothing, both weights accept the closed
//! interval [0, 1].

use crate::error::Result;
use crate::models::Smoother;
use crate::utils::validation::{check_closed_unit, check_min_len};

/// Double exponential smoother.
///
/// Level `s` and trend `b` are zero-padded at index 0:
/// - `s_0 = 0`, `b_0 = 0`
/// - `s_1 = y_0`, `b_1 = y_1 - y_0`
/// - Level: `s_i = α × y_i + (1-α) × (s_{i-1} + b_{i-1})`
/// - Trend: `b_i = β × (s_i - s_{i-1}) + (1-β) × b_{i-1}`
///
/// Only the level sequence is returned. The trend weight β is independent of
/// the seasonal weight used by [`HoltWinters`](super::HoltWinters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleExponentialSmoothing {
    /// Level smoothing weight (0 <= alpha <= 1).
    alpha: f64,
    /// Trend smoothing weight (0 <= trend_weight <= 1).
    trend_weight: f64,
}

impl DoubleExponentialSmoothing {
    /// Create a new smoother.
    ///
    /// # Arguments
    /// * `alpha` - Level smoothing weight, in [0, 1]
    /// * `trend_weight` - Trend smoothing weight, in [0, 1]
    pub fn new(alpha: f64, trend_weight: f64) -> Result<Self> {
        check_closed_unit("alpha", alpha)?;
        check_closed_unit("trend_weight", trend_weight)?;
        Ok(Self {
            alpha,
            trend_weight,
        })
    }

    /// Get the level smoothing weight.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the trend smoothing weight.
    pub fn trend_weight(&self) -> f64 {
        self.trend_weight
    }
}

impl Smoother for DoubleExponentialSmoothing {
    fn smooth(&self, data: &[f64]) -> Result<Vec<f64>> {
        check_min_len(data, 2)?;

        let alpha = self.alpha;
        let beta = self.trend_weight;

        let mut smoothed = Vec::with_capacity(data.len());
        smoothed.push(0.0);
        smoothed.push(data[0]);

        let mut level = data[0];
        let mut trend = data[1] - data[0];

        for &y in &data[2..] {
            let level_prev = level;
            level = alpha * y + (1.0 - alpha) * (level_prev + trend);
            trend = beta * (level - level_prev) + (1.0 - beta) * trend;
            smoothed.push(level);
        }

        Ok(smoothed)
    }

    fn name(&self) -> &str {
        "DoubleES"
    }
}

/// Double exponential smoothing of `data`.
///
/// Rejects series shorter than 2 and any weight outside [0, 1].
pub fn double_exp_smooth(data: &[f64], alpha: f64, trend_weight: f64) -> Result<Vec<f64>> {
    DoubleExponentialSmoothing::new(alpha, trend_weight)?.smooth(data)
}
