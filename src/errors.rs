//! Error types and validation functions for power evaluation.
//!
//! Only one failure is intrinsic to the algorithm: raising an exact zero sum to a
//! non-positive or complex exponent. The remaining variants cover malformed input,
//! either a configuration outside its documented range or a non-finite operand.

use num_complex::Complex64;
use thiserror::Error;

/// Error types for preconditioned power evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PowerEvaluationError {
    /// `x + y == 0` and the exponent is complex or a non-positive real.
    #[error("Cannot reliably compute 0 raised to non-positive or complex power (alpha = {exponent})")]
    DomainError {
        /// Exponent that was requested for the zero base
        exponent: Complex64,
    },

    /// Invalid parameter value for evaluation configuration.
    #[error("Invalid parameter: {parameter} = {value}, expected {constraint}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Invalid value provided
        value: f64,
        /// Valid range or constraint description
        constraint: String,
    },

    /// Numerical computation error, typically a NaN or infinite operand.
    #[error("Numerical computation failed: {reason}")]
    NumericalError {
        /// Detailed reason for numerical failure
        reason: String,
        /// Operation that failed
        operation: Option<String>,
    },
}

impl PowerEvaluationError {
    /// True for the zero-base domain failure.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, PowerEvaluationError::DomainError { .. })
    }
}

/// Result type for power evaluation operations.
///
/// This is a convenience type alias for operations that may fail with [`PowerEvaluationError`].
pub type PowerResult<T> = Result<T, PowerEvaluationError>;

/// Validates that a parameter lies within `[min, max]`.
///
/// # Example
/// ```rust
/// use binomial_power::errors::validate_parameter;
///
/// assert!(validate_parameter(0.5, 0.0, 1.0, "boundary_threshold").is_ok());
/// assert!(validate_parameter(1.5, 0.0, 1.0, "boundary_threshold").is_err());
/// ```
pub fn validate_parameter(value: f64, min: f64, max: f64, name: &str) -> PowerResult<()> {
    if value.is_nan() {
        return Err(PowerEvaluationError::InvalidParameter {
            parameter: name.to_string(),
            value,
            constraint: "must not be NaN".to_string(),
        });
    }

    if min.is_nan() || max.is_nan() || min > max {
        return Err(PowerEvaluationError::NumericalError {
            reason: format!(
                "Invalid bounds for parameter {}: min={}, max={}",
                name, min, max
            ),
            operation: None,
        });
    }

    if value < min || value > max {
        Err(PowerEvaluationError::InvalidParameter {
            parameter: name.to_string(),
            value,
            constraint: format!("[{}, {}]", min, max),
        })
    } else {
        Ok(())
    }
}

/// Validates that a parameter lies strictly inside `(min, max)`.
pub fn validate_open_interval(value: f64, min: f64, max: f64, name: &str) -> PowerResult<()> {
    validate_parameter(value, min, max, name)?;
    if value == min || value == max {
        return Err(PowerEvaluationError::InvalidParameter {
            parameter: name.to_string(),
            value,
            constraint: format!("({}, {})", min, max),
        });
    }
    Ok(())
}

/// Validates that a real value is finite and not NaN.
///
/// # Example
/// ```rust
/// use binomial_power::errors::validate_finite;
///
/// assert!(validate_finite(1.0, "tolerance").is_ok());
/// assert!(validate_finite(f64::NAN, "tolerance").is_err());
/// assert!(validate_finite(f64::INFINITY, "tolerance").is_err());
/// ```
pub fn validate_finite(value: f64, name: &str) -> PowerResult<()> {
    if !value.is_finite() {
        Err(PowerEvaluationError::NumericalError {
            reason: format!("{} is not finite: {}", name, value),
            operation: None,
        })
    } else {
        Ok(())
    }
}

/// Validates that both components of a complex value are finite.
pub fn validate_finite_complex(value: Complex64, name: &str) -> PowerResult<()> {
    if value.re.is_finite() && value.im.is_finite() {
        return Ok(());
    }

    Err(PowerEvaluationError::NumericalError {
        reason: format!("{} has a non-finite component: {}", name, value),
        operation: Some("power evaluation".to_string()),
    })
}

/// Validates an iteration budget (must allow at least one series term).
pub fn validate_max_terms(max_terms: usize) -> PowerResult<()> {
    if max_terms == 0 {
        return Err(PowerEvaluationError::InvalidParameter {
            parameter: "max_terms".to_string(),
            value: 0.0,
            constraint: ">= 1".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_parameter_valid_range() {
        assert!(validate_parameter(0.5, 0.0, 1.0, "boundary_threshold").is_ok());
        assert!(validate_parameter(0.0, 0.0, 1.0, "test").is_ok());
        assert!(validate_parameter(1.0, 0.0, 1.0, "test").is_ok());
    }

    #[test]
    fn test_validate_parameter_out_of_range() {
        let result = validate_parameter(1.5, 0.0, 1.0, "boundary_threshold");

        match result {
            Err(PowerEvaluationError::InvalidParameter {
                parameter,
                value,
                constraint,
            }) => {
                assert_eq!(parameter, "boundary_threshold");
                assert_eq!(value, 1.5);
                assert_eq!(constraint, "[0, 1]");
            }
            _ => panic!("Expected InvalidParameter error"),
        }
    }

    #[test]
    fn test_validate_parameter_nan_inputs() {
        let result = validate_parameter(f64::NAN, 0.0, 1.0, "test");
        assert!(matches!(
            result,
            Err(PowerEvaluationError::InvalidParameter { .. })
        ));

        let result = validate_parameter(0.5, f64::NAN, 1.0, "test");
        assert!(matches!(result, Err(PowerEvaluationError::NumericalError { .. })));

        let result = validate_parameter(0.5, 1.0, 0.0, "test");
        assert!(matches!(result, Err(PowerEvaluationError::NumericalError { .. })));
    }

    #[test]
    fn test_validate_open_interval_rejects_endpoints() {
        assert!(validate_open_interval(0.9, 0.0, 1.0, "boundary_threshold").is_ok());
        assert!(validate_open_interval(0.0, 0.0, 1.0, "boundary_threshold").is_err());

        match validate_open_interval(1.0, 0.0, 1.0, "boundary_threshold") {
            Err(PowerEvaluationError::InvalidParameter { constraint, .. }) => {
                assert_eq!(constraint, "(0, 1)");
            }
            other => panic!("Expected InvalidParameter error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite(1e-10, "tolerance").is_ok());

        match validate_finite(f64::NAN, "tolerance") {
            Err(PowerEvaluationError::NumericalError { reason, .. }) => {
                assert!(reason.contains("tolerance"));
                assert!(reason.contains("not finite"));
            }
            _ => panic!("Expected NumericalError for NaN"),
        }
        assert!(validate_finite(f64::NEG_INFINITY, "tolerance").is_err());
    }

    #[test]
    fn test_validate_finite_complex() {
        assert!(validate_finite_complex(Complex64::new(1.0, -2.0), "x").is_ok());
        assert!(validate_finite_complex(Complex64::new(f64::NAN, 0.0), "x").is_err());

        match validate_finite_complex(Complex64::new(0.0, f64::INFINITY), "alpha") {
            Err(PowerEvaluationError::NumericalError { reason, operation }) => {
                assert!(reason.contains("alpha"));
                assert_eq!(operation.as_deref(), Some("power evaluation"));
            }
            _ => panic!("Expected NumericalError for infinite imaginary part"),
        }
    }

    #[test]
    fn test_validate_max_terms() {
        assert!(validate_max_terms(1).is_ok());
        assert!(matches!(
            validate_max_terms(0),
            Err(PowerEvaluationError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_error_display_formatting() {
        let domain = PowerEvaluationError::DomainError {
            exponent: Complex64::new(-0.5, 0.0),
        };
        let message = format!("{}", domain);
        assert!(message.contains("non-positive or complex power"));
        assert!(domain.is_domain_error());

        let invalid = PowerEvaluationError::InvalidParameter {
            parameter: "tolerance".to_string(),
            value: -1.0,
            constraint: "> 0".to_string(),
        };
        let message = format!("{}", invalid);
        assert!(message.contains("Invalid parameter"));
        assert!(message.contains("tolerance"));
        assert!(!invalid.is_domain_error());
    }
}
