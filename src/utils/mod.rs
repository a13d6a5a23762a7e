//! Utility functions for smoothing models.

pub mod metrics;
pub mod validation;

pub use metrics::{calculate_metrics, mse, rmse, sum_sq_error, AccuracyMetrics};
