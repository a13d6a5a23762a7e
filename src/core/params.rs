//! Holt-Winters configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmoothingError};
use crate::utils::validation::check_closed_unit;

/// Smoothing weights, season length and forecast horizon for triple
/// exponential smoothing.
///
/// Serializable so that parameter sets can be read from configuration or
/// stored by an external optimizer.
///
/// # Example
///
/// ```
/// use exp_smoothing::core::HoltWintersParams;
///
/// let params: HoltWintersParams = serde_json::from_str(
///     r#"{"alpha":0.716,"beta":0.029,"gamma":0.993,"season_length":12,"horizon":24}"#,
/// )
/// .unwrap();
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoltWintersParams {
    /// Level smoothing weight (0 <= alpha <= 1).
    pub alpha: f64,
    /// Trend smoothing weight (0 <= beta <= 1).
    pub beta: f64,
    /// Seasonal smoothing weight (0 <= gamma <= 1).
    pub gamma: f64,
    /// Observations per seasonal cycle.
    pub season_length: usize,
    /// Number of out-of-sample steps to forecast.
    #[serde(default)]
    pub horizon: usize,
}

impl HoltWintersParams {
    /// Create a parameter set. Call [`validate`](Self::validate) before use.
    pub fn new(alpha: f64, beta: f64, gamma: f64, season_length: usize, horizon: usize) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            season_length,
            horizon,
        }
    }

    /// Return a copy with a different forecast horizon.
    pub fn with_horizon(self, horizon: usize) -> Self {
        Self { horizon, ..self }
    }

    /// Check the weights lie in [0, 1] and the season length is positive
    /// with two seasons still addressable.
    pub fn validate(&self) -> Result<()> {
        check_closed_unit("alpha", self.alpha)?;
        check_closed_unit("beta", self.beta)?;
        check_closed_unit("gamma", self.gamma)?;
        if self.season_length == 0 {
            tracing::debug!("rejected zero season length");
            return Err(SmoothingError::InvalidParameter(
                "season_length must be positive".to_string(),
            ));
        }
        self.two_seasons()?;
        Ok(())
    }

    /// Number of observations spanning two full seasons.
    pub fn two_seasons(&self) -> Result<usize> {
        self.season_length.checked_mul(2).ok_or_else(|| {
            tracing::debug!(season_length = self.season_length, "rejected season length");
            SmoothingError::InvalidParameter(format!(
                "season_length {} is too large",
                self.season_length
            ))
        })
    }

    /// Length of the smoothed-plus-forecast output for `n` observations.
    pub fn output_len(&self, n: usize) -> Result<usize> {
        let max_len = isize::MAX as usize / std::mem::size_of::<f64>();
        n.checked_add(self.horizon)
            .filter(|&len| len <= max_len)
            .ok_or_else(|| {
                tracing::debug!(n, horizon = self.horizon, "rejected forecast horizon");
                SmoothingError::InvalidParameter(format!(
                    "horizon {} is too large for {n} observations",
                    self.horizon
                ))
            })
    }
}

impl Default for HoltWintersParams {
    fn default() -> Self {
        Self::new(0.3, 0.1, 0.1, 12, 0)
    }
}
