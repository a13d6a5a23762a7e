//! Smoother trait defining the common interface for all smoothing methods.

use crate::error::Result;

/// Common interface for exponential smoothing methods.
///
/// This trait is object-safe and can be used with `Box<dyn Smoother>`, which
/// lets a parameter search swap methods behind one interface.
pub trait Smoother {
    /// Smooth the series, returning the method's full output sequence.
    fn smooth(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Smooth the series, mapping any rejection to an empty sequence.
    fn smooth_or_empty(&self, data: &[f64]) -> Vec<f64> {
        self.smooth(data).unwrap_or_default()
    }

    /// Get the method name.
    fn name(&self) -> &str;
}

/// Type alias for boxed smoother trait objects.
///
/// # Example
///
/// ```
/// use exp_smoothing::models::{BoxedSmoother, Smoother};
/// use exp_smoothing::models::exponential::SimpleExponentialSmoothing;
///
/// let model: BoxedSmoother = Box::new(SimpleExponentialSmoothing::new(0.3).unwrap());
/// assert_eq!(model.name(), "SES");
/// ```
pub type BoxedSmoother = Box<dyn Smoother>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HoltWintersParams;
    use crate::models::exponential::{
        DoubleExponentialSmoothing, HoltWinters, SimpleExponentialSmoothing,
    };

    fn all_models() -> Vec<BoxedSmoother> {
        vec![
            Box::new(SimpleExponentialSmoothing::new(0.3).unwrap()),
            Box::new(DoubleExponentialSmoothing::new(0.5, 0.3).unwrap()),
            Box::new(HoltWinters::new(HoltWintersParams::new(0.5, 0.1, 0.5, 4, 3)).unwrap()),
        ]
    }

    #[test]
    fn boxed_smoothers_report_names() {
        let names: Vec<String> = all_models().iter().map(|m| m.name().to_string()).collect();
        assert_eq!(names, vec!["SES", "DoubleES", "HoltWinters"]);
    }

    #[test]
    fn boxed_smoothers_share_one_interface() {
        let data: Vec<f64> = (0..16).map(|i| 10.0 + (i % 4) as f64).collect();
        let lengths: Vec<usize> = all_models()
            .iter()
            .map(|m| m.smooth(&data).unwrap().len())
            .collect();
        assert_eq!(lengths, vec![16, 16, 19]);
    }

    #[test]
    fn smooth_or_empty_maps_rejections_to_empty() {
        for model in all_models() {
            assert!(model.smooth_or_empty(&[1.0]).is_empty());
        }
    }
}
