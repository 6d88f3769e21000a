//! # Edge-Case Resolution
//!
//! Degenerate inputs are settled before any preconditioning. Cases are checked in
//! a fixed priority order and the first match ends the computation:
//!
//! 1. `x == 0, y != 0`: `y^alpha`
//! 2. `y == 0, x != 0`: `x^alpha`, or the real odd root for a negative real `x`
//! 3. `x == -y` with an integer `alpha`: `0`
//! 4. `x + y == 0`: `0` for a positive real `alpha`, otherwise a domain error
//! 5. `|x| == |y|`: `exp(alpha * ln(x + y))` with a precision advisory

use crate::diagnostics::{raise, Advisory};
use crate::errors::{PowerEvaluationError, PowerResult};
use crate::math_utils::constants::MAX_ROOT_DENOMINATOR;
use crate::math_utils::{
    is_real, is_real_integer, is_real_negative, is_real_positive, is_zero, principal_pow,
};
use crate::rational::limit_denominator;
use crate::results::{EvaluationDiagnostics, PowerEvaluation, Resolution};
use num_complex::Complex64;

/// Annotation attached to real odd-root results
pub const REAL_ODD_ROOT_NOTE: &str = "real odd root";

/// Settle degenerate inputs.
///
/// Returns `Ok(None)` when no edge case applies and the series stages should run.
pub fn resolve_edge_case(
    x: Complex64,
    y: Complex64,
    alpha: Complex64,
) -> PowerResult<Option<PowerEvaluation>> {
    let zero = Complex64::new(0.0, 0.0);

    if is_zero(x) && !is_zero(y) {
        log::debug!("x == 0: raising y directly");
        let diagnostics =
            EvaluationDiagnostics::closed_form(Resolution::ZeroOperand, false).with_ratio(zero);
        return Ok(Some(PowerEvaluation::new(
            principal_pow(y, alpha),
            diagnostics,
        )));
    }

    if is_zero(y) && !is_zero(x) {
        if let Some(root) = real_odd_root(x, alpha) {
            log::debug!("y == 0: real odd root of negative base {}", x.re);
            let diagnostics = EvaluationDiagnostics::closed_form(Resolution::RealOddRoot, false)
                .with_ratio(zero)
                .with_note(REAL_ODD_ROOT_NOTE);
            return Ok(Some(PowerEvaluation::new(root, diagnostics)));
        }

        log::debug!("y == 0: raising x directly");
        let diagnostics =
            EvaluationDiagnostics::closed_form(Resolution::ZeroOperand, false).with_ratio(zero);
        return Ok(Some(PowerEvaluation::new(
            principal_pow(x, alpha),
            diagnostics,
        )));
    }

    if x == -y && is_real_integer(alpha) {
        log::debug!("x == -y with integer exponent {}", alpha.re);
        let diagnostics = EvaluationDiagnostics::closed_form(Resolution::CancellingInteger, false);
        return Ok(Some(PowerEvaluation::new(zero, diagnostics)));
    }

    let sum = x + y;
    if is_zero(sum) {
        if is_real_positive(alpha) {
            log::debug!("x + y == 0 with positive exponent {}", alpha.re);
            let diagnostics = EvaluationDiagnostics::closed_form(Resolution::ZeroSum, true);
            return Ok(Some(PowerEvaluation::new(zero, diagnostics)));
        }
        return Err(PowerEvaluationError::DomainError { exponent: alpha });
    }

    let magnitude = x.norm();
    if magnitude == y.norm() {
        let mut diagnostics = EvaluationDiagnostics::closed_form(Resolution::EqualMagnitude, true);
        raise(
            &mut diagnostics.advisories,
            Advisory::EqualMagnitude { magnitude },
        );
        return Ok(Some(PowerEvaluation::new(
            principal_pow(sum, alpha),
            diagnostics,
        )));
    }

    Ok(None)
}

/// `-(|x|^alpha)` when `x` is a negative real and `alpha` a real whose best
/// rational approximation (denominator at most 1000) has an odd denominator.
///
/// Integer exponents have denominator 1, so `(-8)^2` comes out as `-64`.
fn real_odd_root(x: Complex64, alpha: Complex64) -> Option<Complex64> {
    if !is_real_negative(x) || !is_real(alpha) {
        return None;
    }

    let fraction = limit_denominator(alpha.re, MAX_ROOT_DENOMINATOR)?;
    if !fraction.has_odd_denominator() {
        return None;
    }

    Some(Complex64::new(-x.re.abs().powf(alpha.re), 0.0))
}
