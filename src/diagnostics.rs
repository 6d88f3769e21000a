//! # Advisories
//!
//! Non-fatal notifications raised while evaluating a power. An advisory never
//! changes the returned value and never aborts the call; it is recorded in the
//! evaluation diagnostics and mirrored to the `log` facade at `warn` level so
//! that callers who only look at the value still get a trace.

use num_complex::Complex64;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Broad class of an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AdvisoryCategory {
    /// A less favourable direct evaluation was forced
    Precision,
    /// The series was skipped or did not converge within budget
    Convergence,
}

/// A numerically notable condition encountered during evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Advisory {
    /// `|x| == |y|`: no dominant operand, evaluated directly via log-exp.
    EqualMagnitude {
        /// Common magnitude of both operands
        magnitude: f64,
    },
    /// `|z|` exceeded the boundary threshold, evaluated directly via log-exp.
    BoundaryFallback {
        /// Preconditioned ratio `z = B / A`
        ratio: Complex64,
        /// Configured boundary threshold
        threshold: f64,
    },
    /// The term budget ran out before either stopping test fired.
    NonConvergence {
        /// Terms attempted
        terms: usize,
        /// `|z|`
        ratio_abs: f64,
        /// Magnitude of the final term
        last_term_abs: f64,
    },
}

impl Advisory {
    /// Category of this advisory.
    pub fn category(&self) -> AdvisoryCategory {
        match self {
            Advisory::EqualMagnitude { .. } => AdvisoryCategory::Precision,
            Advisory::BoundaryFallback { .. } | Advisory::NonConvergence { .. } => {
                AdvisoryCategory::Convergence
            }
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::EqualMagnitude { magnitude } => {
                write!(f, "|x| == |y| ({:.6e}) -> log-exp fallback", magnitude)
            }
            Advisory::BoundaryFallback { ratio, threshold } => write!(
                f,
                "|z| = {:.4} > {} -> log-exp fallback",
                ratio.norm(),
                threshold
            ),
            Advisory::NonConvergence {
                terms,
                ratio_abs,
                last_term_abs,
            } => write!(
                f,
                "No convergence after {} terms (|z|={:.4}, |term|={:.2e})",
                terms, ratio_abs, last_term_abs
            ),
        }
    }
}

/// Record an advisory and mirror it to the log.
pub(crate) fn raise(advisories: &mut Vec<Advisory>, advisory: Advisory) {
    log::warn!("{}", advisory);
    advisories.push(advisory);
}
