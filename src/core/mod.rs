//! Core value types: configuration and partitioned output.

mod forecast;
mod params;

pub use forecast::HoltWintersForecast;
pub use params::HoltWintersParams;
