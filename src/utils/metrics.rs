//! Squared-error metrics for scoring smoothing parameters.
//!
//! These are the objective functions an external optimizer evaluates when
//! searching for alpha/beta/gamma. All of them share one validation path:
//! both sequences must be non-empty and of equal length.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmoothingError};

/// Squared-error summary of a prediction against ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Sum of squared errors
    pub sse: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
}

/// Validate the pair and return `(sse, n)`.
fn checked_sse(predictions: &[f64], actual: &[f64]) -> Result<(f64, usize)> {
    if predictions.is_empty() || actual.is_empty() {
        tracing::debug!(
            predictions = predictions.len(),
            actual = actual.len(),
            "rejected empty metric input"
        );
        return Err(SmoothingError::EmptyData);
    }

    if predictions.len() != actual.len() {
        tracing::debug!(
            predictions = predictions.len(),
            actual = actual.len(),
            "rejected metric input of unequal length"
        );
        return Err(SmoothingError::DimensionMismatch {
            expected: actual.len(),
            got: predictions.len(),
        });
    }

    let sse = predictions
        .iter()
        .zip(actual.iter())
        .map(|(p, a)| (p - a).powi(2))
        .sum::<f64>();

    Ok((sse, actual.len()))
}

/// Sum of squared errors, `Σ (predictions[i] - actual[i])²`.
pub fn sum_sq_error(predictions: &[f64], actual: &[f64]) -> Result<f64> {
    checked_sse(predictions, actual).map(|(sse, _)| sse)
}

/// Mean squared error, `sum_sq_error / n`.
pub fn mse(predictions: &[f64], actual: &[f64]) -> Result<f64> {
    checked_sse(predictions, actual).map(|(sse, n)| sse / n as f64)
}

/// Root mean squared error.
pub fn rmse(predictions: &[f64], actual: &[f64]) -> Result<f64> {
    mse(predictions, actual).map(f64::sqrt)
}

/// Compute all squared-error metrics in one pass.
///
/// # Example
///
/// ```
/// use exp_smoothing::utils::calculate_metrics;
///
/// let metrics = calculate_metrics(&[1.5, 2.5], &[1.0, 2.0]).unwrap();
/// assert!((metrics.sse - 0.5).abs() < 1e-12);
/// assert!((metrics.mse - 0.25).abs() < 1e-12);
/// assert!((metrics.rmse - 0.5).abs() < 1e-12);
/// ```
pub fn calculate_metrics(predictions: &[f64], actual: &[f64]) -> Result<AccuracyMetrics> {
    let (sse, n) = checked_sse(predictions, actual)?;
    let mse = sse / n as f64;

    Ok(AccuracyMetrics {
        sse,
        mse,
        rmse: mse.sqrt(),
    })
}
