//! Exponential smoothing models.
//!
//! This module provides:
//! - Single exponential smoothing (level only)
//! - Double exponential smoothing (level and trend)
//! - Holt-Winters triple smoothing (level, trend and additive seasonality)

mod double;
mod holt_winters;
mod ses;

pub use double::{double_exp_smooth, DoubleExponentialSmoothing};
pub use holt_winters::{holt_winters, holt_winters_partitioned, HoltWinters, InitialState};
pub use ses::{exp_smooth, SimpleExponentialSmoothing};
