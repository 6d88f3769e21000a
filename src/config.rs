//! # Evaluation Configuration
//!
//! This module contains the knobs that control the series stage of power
//! evaluation: the convergence tolerance, the per-call term budget, and the ratio
//! magnitude above which the series is abandoned for the direct formula.

use crate::errors::{validate_finite, validate_max_terms, validate_open_interval, PowerResult};
use crate::math_utils::constants::{
    DEFAULT_BOUNDARY_THRESHOLD, DEFAULT_MAX_TERMS, DEFAULT_TOLERANCE, NEAR_BOUNDARY_LOWER,
    NEAR_BOUNDARY_MULTIPLIER,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the preconditioned binomial series
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PowerConfig {
    /// Relative tolerance: stop once `|term| < tolerance * |S|`
    pub tolerance: f64,
    /// Series term budget outside the near-boundary band
    pub max_terms: usize,
    /// `|z|` above which the direct `exp(alpha * ln(x + y))` is used instead
    pub boundary_threshold: f64,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl PowerConfig {
    /// Standard configuration: tolerance 1e-12, 100 terms, threshold 0.90
    pub fn standard() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_terms: DEFAULT_MAX_TERMS,
            boundary_threshold: DEFAULT_BOUNDARY_THRESHOLD,
        }
    }

    /// Tighter tolerance with a larger budget, for ratios close to the threshold
    pub fn precise() -> Self {
        Self {
            tolerance: 1e-15,
            max_terms: 400,
            boundary_threshold: DEFAULT_BOUNDARY_THRESHOLD,
        }
    }

    /// Looser tolerance and a lower threshold; more inputs take the direct formula
    pub fn fast() -> Self {
        Self {
            tolerance: 1e-9,
            max_terms: 40,
            boundary_threshold: 0.75,
        }
    }

    /// Replace the relative tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replace the term budget
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }

    /// Replace the boundary threshold
    pub fn with_boundary_threshold(mut self, boundary_threshold: f64) -> Self {
        self.boundary_threshold = boundary_threshold;
        self
    }

    /// Check `tolerance > 0`, `max_terms >= 1` and `0 < boundary_threshold < 1`.
    pub fn validate(&self) -> PowerResult<()> {
        validate_finite(self.tolerance, "tolerance")?;
        validate_open_interval(self.tolerance, 0.0, f64::MAX, "tolerance")?;
        validate_max_terms(self.max_terms)?;
        validate_open_interval(self.boundary_threshold, 0.0, 1.0, "boundary_threshold")?;
        Ok(())
    }

    /// Term budget granted for a ratio of magnitude `ratio_abs`.
    ///
    /// Inside the near-boundary band `(0.75, boundary_threshold]` convergence is
    /// slower, so the budget is tripled.
    pub fn effective_max_terms(&self, ratio_abs: f64) -> usize {
        if ratio_abs > NEAR_BOUNDARY_LOWER && ratio_abs <= self.boundary_threshold {
            self.max_terms
                .max(self.max_terms.saturating_mul(NEAR_BOUNDARY_MULTIPLIER))
        } else {
            self.max_terms
        }
    }

    /// Whether a ratio of magnitude `ratio_abs` is past the series boundary
    pub fn exceeds_boundary(&self, ratio_abs: f64) -> bool {
        ratio_abs.is_nan() || ratio_abs > self.boundary_threshold
    }
}
