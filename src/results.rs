//! # Evaluation Results
//!
//! The value of `(x + y)^alpha` together with the diagnostics record describing
//! how it was obtained. Diagnostics are always produced; callers who only want
//! the number read [`PowerEvaluation::value`].

use crate::diagnostics::{Advisory, AdvisoryCategory};
use num_complex::Complex64;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which stage produced the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Resolution {
    /// One operand was zero; the other was raised directly
    ZeroOperand,
    /// Negative real base with a rational exponent of odd denominator
    RealOddRoot,
    /// `x == -y` with an integer exponent
    CancellingInteger,
    /// `x + y == 0` with a positive real exponent
    ZeroSum,
    /// `|x| == |y|`, evaluated via log-exp
    EqualMagnitude,
    /// `|z|` above the boundary threshold, evaluated via log-exp
    BoundaryFallback,
    /// Preconditioned binomial series
    Series,
}

/// How a power was computed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvaluationDiagnostics {
    /// Index of the last series term examined (0 when the series never ran)
    pub terms_used: usize,
    /// Magnitude of the last series term
    pub last_term_abs: f64,
    /// `|term| < tolerance * |S|` at exit (true for closed-form paths)
    pub converged: bool,
    /// The value came from the direct log-exp formula or a degenerate zero sum
    pub used_fallback: bool,
    /// Preconditioned ratio `B / A`, absent when no ratio was formed
    pub z: Option<Complex64>,
    /// Dominant operand `A`, absent when not computed
    pub base: Option<Complex64>,
    /// Free-text annotation, e.g. `"real odd root"`
    pub note: Option<String>,
    /// Term budget granted to the series (0 when the series never ran)
    pub effective_max_terms: usize,
    /// Stage that produced the value
    pub resolution: Resolution,
    /// Advisories raised during the call, in order
    pub advisories: Vec<Advisory>,
}

impl EvaluationDiagnostics {
    /// Diagnostics for a value obtained without running the series.
    pub(crate) fn closed_form(resolution: Resolution, used_fallback: bool) -> Self {
        Self {
            terms_used: 0,
            last_term_abs: 0.0,
            converged: true,
            used_fallback,
            z: None,
            base: None,
            note: None,
            effective_max_terms: 0,
            resolution,
            advisories: Vec::new(),
        }
    }

    pub(crate) fn with_ratio(mut self, z: Complex64) -> Self {
        self.z = Some(z);
        self
    }

    pub(crate) fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    /// True if any advisory of `category` was raised.
    pub fn has_advisory(&self, category: AdvisoryCategory) -> bool {
        self.advisories.iter().any(|a| a.category() == category)
    }
}

/// Result of evaluating `(x + y)^alpha`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PowerEvaluation {
    /// Computed power
    pub value: Complex64,
    /// How the value was obtained
    pub diagnostics: EvaluationDiagnostics,
}

impl PowerEvaluation {
    pub(crate) fn new(value: Complex64, diagnostics: EvaluationDiagnostics) -> Self {
        Self { value, diagnostics }
    }

    /// Discard the diagnostics.
    pub fn into_value(self) -> Complex64 {
        self.value
    }

    /// Split into value and diagnostics.
    pub fn into_parts(self) -> (Complex64, EvaluationDiagnostics) {
        (self.value, self.diagnostics)
    }
}
