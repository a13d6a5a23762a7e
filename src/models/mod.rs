//! Smoothing models.

mod traits;

pub mod exponential;

pub use traits::{BoxedSmoother, Smoother};
