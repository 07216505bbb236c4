//! Error types for glyphweave.

use thiserror::Error;

/// Result type alias for glyphweave operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while deduplicating or assembling text.
#[derive(Error, Debug)]
pub enum Error {
    /// A spatial tolerance was negative or not a number.
    #[error("Invalid tolerance for {option}: {value} (must be a finite number >= 0)")]
    InvalidTolerance {
        /// Name of the offending option
        option: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A layout density was zero, negative, or not a number.
    #[error("Invalid density for {option}: {value} (must be > 0)")]
    InvalidDensity {
        /// Name of the offending option
        option: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

/// Reject negative, infinite and NaN tolerances.
pub(crate) fn check_tolerance(option: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidTolerance { option, value })
    }
}

/// Reject densities that cannot divide a coordinate into columns or rows.
pub(crate) fn check_density(option: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDensity { option, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidTolerance {
            option: "tolerance",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid tolerance for tolerance: -1 (must be a finite number >= 0)"
        );

        let err = Error::Render("boom".to_string());
        assert_eq!(err.to_string(), "Rendering error: boom");
    }

    #[test]
    fn test_check_tolerance() {
        assert!(check_tolerance("x_tolerance", 0.0).is_ok());
        assert!(check_tolerance("x_tolerance", 3.0).is_ok());
        assert!(check_tolerance("x_tolerance", -0.1).is_err());
        assert!(check_tolerance("x_tolerance", f64::NAN).is_err());
        assert!(check_tolerance("x_tolerance", f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_density() {
        assert!(check_density("x_density", 7.25).is_ok());
        assert!(matches!(
            check_density("y_density", 0.0),
            Err(Error::InvalidDensity { option: "y_density", .. })
        ));
    }
}
