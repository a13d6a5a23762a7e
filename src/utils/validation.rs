//! Input checks shared by the smoothing functions.
//!
//! Single smoothing takes its weight from the open interval (0, 1), while
//! double and triple smoothing accept the closed interval [0, 1]. Both checks
//! reject NaN.

use crate::error::{Result, SmoothingError};

/// Require `value` to lie strictly inside (0, 1).
pub fn check_open_unit(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        return Ok(());
    }
    tracing::debug!(parameter = name, value, "rejected smoothing weight outside (0, 1)");
    Err(SmoothingError::InvalidParameter(format!(
        "{name} must be in (0, 1), got {value}"
    )))
}

/// Require `value` to lie inside [0, 1].
pub fn check_closed_unit(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        return Ok(());
    }
    tracing::debug!(parameter = name, value, "rejected smoothing weight outside [0, 1]");
    Err(SmoothingError::InvalidParameter(format!(
        "{name} must be in [0, 1], got {value}"
    )))
}

/// Require a non-empty series of at least `needed` observations.
pub fn check_min_len(data: &[f64], needed: usize) -> Result<()> {
    if data.is_empty() {
        tracing::debug!(needed, "rejected empty series");
        return Err(SmoothingError::EmptyData);
    }
    if data.len() >= needed {
        return Ok(());
    }
    tracing::debug!(needed, got = data.len(), "rejected short series");
    Err(SmoothingError::InsufficientData {
        needed,
        got: data.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_unit_excludes_bounds() {
        assert!(check_open_unit("alpha", 0.5).is_ok());
        assert!(check_open_unit("alpha", 0.0).is_err());
        assert!(check_open_unit("alpha", 1.0).is_err());
        assert!(check_open_unit("alpha", f64::NAN).is_err());
        assert!(check_open_unit("alpha", f64::INFINITY).is_err());
    }

    #[test]
    fn closed_unit_includes_bounds() {
        assert!(check_closed_unit("beta", 0.0).is_ok());
        assert!(check_closed_unit("beta", 1.0).is_ok());
        assert!(check_closed_unit("beta", -0.01).is_err());
        assert!(check_closed_unit("beta", 1.01).is_err());
        assert!(check_closed_unit("beta", f64::NAN).is_err());
    }

    #[test]
    fn message_names_the_parameter() {
        let err = check_closed_unit("gamma", 2.0).unwrap_err();
        assert_eq!(
            err,
            SmoothingError::InvalidParameter("gamma must be in [0, 1], got 2".to_string())
        );
    }

    #[test]
    fn min_len_reports_counts() {
        assert!(check_min_len(&[1.0, 2.0], 2).is_ok());
        assert_eq!(
            check_min_len(&[1.0], 2),
            Err(SmoothingError::InsufficientData { needed: 2, got: 1 })
        );
    }

    #[test]
    fn min_len_reports_empty_series() {
        assert_eq!(check_min_len(&[], 2), Err(SmoothingError::EmptyData));
        assert_eq!(check_min_len(&[], 0), Err(SmoothingError::EmptyData));
    }
}
