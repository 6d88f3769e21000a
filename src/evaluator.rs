//! # Power Evaluator
//!
//! Runs the four stages in order with early return:
//! edge-case resolution, preconditioning, the boundary policy, and series
//! summation composed with `A^alpha`. The evaluator holds only its configuration
//! and keeps no state between calls, so one instance can be shared freely across
//! threads.

use crate::config::PowerConfig;
use crate::diagnostics::{raise, Advisory};
use crate::edge_cases::resolve_edge_case;
use crate::errors::{validate_finite_complex, PowerEvaluationError, PowerResult};
use crate::math_utils::principal_pow;
use crate::preconditioning::{plan_series, precondition, SeriesPlan};
use crate::results::{EvaluationDiagnostics, PowerEvaluation, Resolution};
use crate::series::sum_binomial_series;
use num_complex::Complex64;

/// Evaluates `(x + y)^alpha` with the preconditioned binomial series.
///
/// # Example
/// ```rust
/// use binomial_power::PowerEvaluator;
///
/// let evaluator = PowerEvaluator::new();
/// let eval = evaluator.evaluate(10000.0, 62500.0, 0.5).unwrap();
/// assert!((eval.value.re - 72500f64.sqrt()).abs() < 1e-8);
/// assert!(!eval.diagnostics.used_fallback);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PowerEvaluator {
    config: PowerConfig,
}

impl PowerEvaluator {
    /// Evaluator with [`PowerConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator with an explicit configuration.
    pub fn with_config(config: PowerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &PowerConfig {
        &self.config
    }

    /// Evaluate `(x + y)^alpha`.
    ///
    /// # Errors
    /// - [`PowerEvaluationError::DomainError`] when `x + y == 0` and `alpha` is
    ///   complex or a non-positive real (and not an integer with `x == -y`).
    /// - [`PowerEvaluationError::InvalidParameter`] for an out-of-range configuration.
    /// - [`PowerEvaluationError::NumericalError`] for a NaN or infinite input component.
    pub fn evaluate<X, Y, A>(&self, x: X, y: Y, alpha: A) -> PowerResult<PowerEvaluation>
    where
        X: Into<Complex64>,
        Y: Into<Complex64>,
        A: Into<Complex64>,
    {
        let (x, y, alpha) = (x.into(), y.into(), alpha.into());

        self.config.validate()?;
        validate_finite_complex(x, "x")?;
        validate_finite_complex(y, "y")?;
        validate_finite_complex(alpha, "alpha")?;

        if let Some(resolved) = resolve_edge_case(x, y, alpha)? {
            return Ok(resolved);
        }

        let preconditioned =
            precondition(x, y).ok_or_else(|| PowerEvaluationError::NumericalError {
                reason: format!("no dominant operand for x = {}, y = {}", x, y),
                operation: Some("preconditioning".to_string()),
            })?;

        let effective_max_terms = match plan_series(preconditioned.ratio_abs, &self.config) {
            SeriesPlan::Fallback => {
                let mut diagnostics =
                    EvaluationDiagnostics::closed_form(Resolution::BoundaryFallback, true)
                        .with_ratio(preconditioned.ratio);
                raise(
                    &mut diagnostics.advisories,
                    Advisory::BoundaryFallback {
                        ratio: preconditioned.ratio,
                        threshold: self.config.boundary_threshold,
                    },
                );
                return Ok(PowerEvaluation::new(
                    principal_pow(x + y, alpha),
                    diagnostics,
                ));
            }
            SeriesPlan::Sum {
                effective_max_terms,
            } => effective_max_terms,
        };

        let summation = sum_binomial_series(
            alpha,
            preconditioned.ratio,
            self.config.tolerance,
            effective_max_terms,
        );

        let mut advisories = Vec::new();
        if summation.exhausted {
            raise(
                &mut advisories,
                Advisory::NonConvergence {
                    terms: effective_max_terms,
                    ratio_abs: preconditioned.ratio_abs,
                    last_term_abs: summation.last_term_abs,
                },
            );
        }

        let value = principal_pow(preconditioned.base, alpha) * summation.sum;
        let diagnostics = EvaluationDiagnostics {
            terms_used: summation.terms_used,
            last_term_abs: summation.last_term_abs,
            converged: summation.converged,
            used_fallback: false,
            z: Some(preconditioned.ratio),
            base: Some(preconditioned.base),
            note: None,
            effective_max_terms,
            resolution: Resolution::Series,
            advisories,
        };

        Ok(PowerEvaluation::new(value, diagnostics))
    }
}

/// Evaluate `(x + y)^alpha` under `config`, returning the value and diagnostics.
pub fn evaluate_power<X, Y, A>(
    x: X,
    y: Y,
    alpha: A,
    config: &PowerConfig,
) -> PowerResult<PowerEvaluation>
where
    X: Into<Complex64>,
    Y: Into<Complex64>,
    A: Into<Complex64>,
{
    PowerEvaluator::with_config(*config).evaluate(x, y, alpha)
}

/// Evaluate `(x + y)^alpha` with default settings, discarding diagnostics.
///
/// # Example
/// ```rust
/// use binomial_power::binomial_power;
///
/// let root = binomial_power(-8.0, 0.0, 1.0 / 3.0).unwrap();
/// assert!((root.re + 2.0).abs() < 1e-12);
/// assert_eq!(root.im, 0.0);
/// ```
pub fn binomial_power<X, Y, A>(x: X, y: Y, alpha: A) -> PowerResult<Complex64>
where
    X: Into<Complex64>,
    Y: Into<Complex64>,
    A: Into<Complex64>,
{
    PowerEvaluator::new()
        .evaluate(x, y, alpha)
        .map(PowerEvaluation::into_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::AdvisoryCategory;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_series_path_cube_root_of_nine() {
        let eval = PowerEvaluator::new().evaluate(1.0, 8.0, 1.0 / 3.0).unwrap();
        assert_approx_eq!(eval.value.re, 9f64.powf(1.0 / 3.0), 1e-12);
        assert_approx_eq!(eval.value.im, 0.0, 1e-14);

        let d = &eval.diagnostics;
        assert_eq!(d.resolution, Resolution::Series);
        assert_eq!(d.base, Some(Complex64::new(8.0, 0.0)));
        assert_eq!(d.z, Some(Complex64::new(0.125, 0.0)));
        assert_eq!(d.effective_max_terms, 100);
        assert!(d.converged);
        assert!(!d.used_fallback);
        assert!(d.advisories.is_empty());
        assert!(d.terms_used >= 1 && d.terms_used <= 100);
    }

    #[test]
    fn test_boundary_fallback() {
        let eval = PowerEvaluator::new().evaluate(1.0, 1.1, 1.0 / 3.0).unwrap();
        assert_approx_eq!(eval.value.re, 2.1f64.powf(1.0 / 3.0), 1e-12);

        let d = &eval.diagnostics;
        assert!(d.used_fallback);
        assert_eq!(d.resolution, Resolution::BoundaryFallback);
        assert_eq!(d.terms_used, 0);
        assert_approx_eq!(d.z.unwrap().re, 1.0 / 1.1, 1e-15);
        assert!(d.has_advisory(AdvisoryCategory::Convergence));
    }

    #[test]
    fn test_raised_threshold_uses_extended_series() {
        let config = PowerConfig::default().with_boundary_threshold(0.95);
        let eval = evaluate_power(1.0, 1.1, 1.0 / 3.0, &config).unwrap();
        assert_approx_eq!(eval.value.re, 2.1f64.powf(1.0 / 3.0), 1e-10);

        let d = &eval.diagnostics;
        assert!(!d.used_fallback);
        assert_eq!(d.effective_max_terms, 300);
        assert!(d.terms_used <= 300);
    }

    #[test]
    fn test_non_convergence_advisory_keeps_partial_sum() {
        let config = PowerConfig::default().with_max_terms(4);
        let eval = evaluate_power(1.0, 2.0, 1.0 / 3.0, &config).unwrap();

        let d = &eval.diagnostics;
        assert_eq!(d.terms_used, 4);
        assert!(!d.converged);
        assert_eq!(d.advisories.len(), 1);
        assert!(matches!(
            d.advisories[0],
            Advisory::NonConvergence { terms: 4, .. }
        ));
        assert_approx_eq!(eval.value.re, 3f64.powf(1.0 / 3.0), 1e-2);
    }

    #[test]
    fn test_domain_error_propagates() {
        let result = binomial_power(
            Complex64::new(2.0, 3.0),
            Complex64::new(-2.0, -3.0),
            -0.5,
        );
        assert!(matches!(
            result,
            Err(PowerEvaluationError::DomainError { .. })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PowerConfig::default().with_boundary_threshold(1.2);
        let result = evaluate_power(1.0, 8.0, 0.5, &config);
        assert!(matches!(
            result,
            Err(PowerEvaluationError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let result = binomial_power(f64::NAN, 1.0, 0.5);
        assert!(matches!(
            result,
            Err(PowerEvaluationError::NumericalError { .. })
        ));
    }

    #[test]
    fn test_evaluator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PowerEvaluator>();
        assert_send_sync::<PowerEvaluation>();
    }
}
