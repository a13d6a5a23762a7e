//! Single exponential smoothing.
//!
//! Level-only smoothing. Each output is a one-step-ahead estimate: position
//! `i` smooths the observations up to and including `data[i - 1]`.

use crate::error::Result;
use crate::models::Smoother;
use crate::utils::validation::{check_min_len, check_open_unit};

/// Single exponential smoother.
///
/// The output is zero-padded so that it aligns with the input:
/// - `s_0 = 0` (no estimate yet)
/// - `s_1 = y_0`
/// - `s_i = α × y_{i-1} + (1-α) × s_{i-1}` for `i >= 2`
///
/// where α (alpha) is the smoothing weight, 0 < α < 1.
///
/// # Example
/// ```
/// use exp_smoothing::models::exponential::SimpleExponentialSmoothing;
/// use exp_smoothing::models::Smoother;
///
/// let model = SimpleExponentialSmoothing::new(0.3).unwrap();
/// let smoothed = model.smooth(&[6.4, 5.6, 7.8]).unwrap();
/// assert_eq!(smoothed[0], 0.0);
/// assert_eq!(smoothed[1], 6.4);
/// assert!((smoothed[2] - 6.16).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleExponentialSmoothing {
    /// Smoothing weight (0 < alpha < 1).
    alpha: f64,
}

impl SimpleExponentialSmoothing {
    /// Create a new smoother.
    ///
    /// Both bounds are exclusive: 0 and 1 are rejected, as is NaN.
    pub fn new(alpha: f64) -> Result<Self> {
        check_open_unit("alpha", alpha)?;
        Ok(Self { alpha })
    }

    /// Get the smoothing weight.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Smoother for SimpleExponentialSmoothing {
    fn smooth(&self, data: &[f64]) -> Result<Vec<f64>> {
        check_min_len(data, 2)?;

        let mut smoothed = Vec::with_capacity(data.len());
        smoothed.push(0.0);
        smoothed.push(data[0]);

        let mut level = data[0];
        for &y in &data[1..data.len() - 1] {
            level = self.alpha * y + (1.0 - self.alpha) * level;
            smoothed.push(level);
        }

        Ok(smoothed)
    }

    fn name(&self) -> &str {
        "SES"
    }
}

/// Single exponential smoothing of `data` with weight `alpha`.
///
/// Rejects series shorter than 2 and any alpha outside (0, 1).
pub fn exp_smooth(data: &[f64], alpha: f64) -> Result<Vec<f64>> {
    SimpleExponentialSmoothing::new(alpha)?.smooth(data)
}
