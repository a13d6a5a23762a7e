//! # exp-smoothing
//!
//! Exponential smoothing for numeric time series.
//!
//! Provides single (level), double (level and trend) and Holt-Winters
//! (level, trend and additive seasonality) smoothing, along with the
//! squared-error metrics used to score a choice of smoothing weights.
//! Choosing the weights is left to the caller.
//!
//! Every function is pure: inputs are borrowed, never modified, and no state
//! survives between calls. Invalid input is reported through [`Result`]
//! rather than by panicking.
//!
//! ```
//! use exp_smoothing::prelude::*;
//!
//! let data = [10.0, 20.0, 12.0, 22.0, 14.0, 24.0, 16.0, 26.0];
//! let forecast = holt_winters_partitioned(&data, 0.5, 0.1, 0.5, 2, 4).unwrap();
//! assert_eq!(forecast.predictions().len(), 4);
//!
//! let score = mse(&forecast.smoothed()[1..], &data[1..]).unwrap();
//! assert!(score >= 0.0);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{Result, SmoothingError};

pub mod prelude {
    pub use crate::core::{HoltWintersForecast, HoltWintersParams};
    pub use crate::error::{Result, SmoothingError};
    pub use crate::models::exponential::{
        double_exp_smooth, exp_smooth, holt_winters, holt_winters_partitioned,
        DoubleExponentialSmoothing, HoltWinters, SimpleExponentialSmoothing,
    };
    pub use crate::models::{BoxedSmoother, Smoother};
    pub use crate::utils::{calculate_metrics, mse, rmse, sum_sq_error, AccuracyMetrics};
}
