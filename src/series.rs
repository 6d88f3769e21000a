//! # Generalized Binomial Series
//!
//! Sums `(1 + z)^alpha = sum_k C(alpha, k) z^k` for `|z| < 1` with the
//! multiplicative recurrence
//!
//! ```text
//! term_0 = 1
//! term_k = term_{k-1} * (alpha - k + 1) * z / k
//! ```
//!
//! Each iteration first applies an absolute floor to the fresh term (a negligible
//! term stops the loop without being added), then accumulates it, then applies
//! the relative tolerance. Exhausting the budget is not an error: the partial sum
//! is returned and the caller raises a non-convergence advisory.

use crate::math_utils::constants::{ABSOLUTE_TERM_FLOOR, RELATIVE_TERM_FLOOR};
use num_complex::Complex64;

/// Outcome of a bounded series summation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummation {
    /// Partial sum `S`
    pub sum: Complex64,
    /// Index of the last term examined, at most the budget
    pub terms_used: usize,
    /// `|term|` of the last term examined
    pub last_term_abs: f64,
    /// `|term| < tolerance * |S|` at exit
    pub converged: bool,
    /// The budget ran out before either stopping test fired
    pub exhausted: bool,
}

/// Sum the binomial series for `(1 + z)^alpha` with at most `max_terms` terms
/// beyond the constant term.
pub fn sum_binomial_series(
    alpha: Complex64,
    z: Complex64,
    tolerance: f64,
    max_terms: usize,
) -> SeriesSummation {
    let mut sum = Complex64::new(1.0, 0.0);
    let mut term = Complex64::new(1.0, 0.0);
    let mut terms_used = max_terms;
    let mut exhausted = true;

    for k in 1..=max_terms {
        let kf = k as f64;
        term *= (alpha - kf + 1.0) * z / kf;

        let term_abs = term.norm();
        if term_abs < RELATIVE_TERM_FLOOR * sum.norm() || term_abs < ABSOLUTE_TERM_FLOOR {
            terms_used = k;
            exhausted = false;
            break;
        }

        sum += term;

        if term_abs < tolerance * sum.norm() {
            terms_used = k;
            exhausted = false;
            break;
        }
    }

    let last_term_abs = term.norm();
    SeriesSummation {
        sum,
        terms_used,
        last_term_abs,
        converged: last_term_abs < tolerance * sum.norm(),
        exhausted,
    }
}
