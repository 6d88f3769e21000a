//! # Mathematical Utilities
//!
//! Complex-number helpers shared by the evaluation stages: the principal power,
//! realness and integrality predicates, and approximate comparisons used by tests
//! and callers.

use num_complex::Complex64;

/// Numerical constants used throughout power evaluation.
pub mod constants {
    /// Default relative tolerance for series convergence
    pub const DEFAULT_TOLERANCE: f64 = 1e-12;

    /// Default per-call series term budget
    pub const DEFAULT_MAX_TERMS: usize = 100;

    /// Default `|z|` above which the series is abandoned for the direct formula
    pub const DEFAULT_BOUNDARY_THRESHOLD: f64 = 0.90;

    /// Lower edge of the near-boundary band, where the term budget is extended
    pub const NEAR_BOUNDARY_LOWER: f64 = 0.75;

    /// Term budget multiplier inside the near-boundary band
    pub const NEAR_BOUNDARY_MULTIPLIER: usize = 3;

    /// A term below this absolute magnitude is negligible
    pub const ABSOLUTE_TERM_FLOOR: f64 = 1e-14;

    /// A term below this fraction of the running sum is negligible
    pub const RELATIVE_TERM_FLOOR: f64 = 1e-16;

    /// Largest denominator considered when recognising a rational exponent
    pub const MAX_ROOT_DENOMINATOR: i128 = 1000;

    /// Default epsilon for approximate comparisons
    pub const DEFAULT_EPSILON: f64 = 1e-12;
}

/// Principal branch power `exp(alpha * ln(base))`.
///
/// The branch cut of the logarithm lies along the negative real axis. The caller
/// must not pass a zero base; `ln(0)` is `-inf` and the result is meaningless.
#[inline]
pub fn principal_pow(base: Complex64, exponent: Complex64) -> Complex64 {
    (exponent * base.ln()).exp()
}

/// Exact zero test (both components compare equal to zero, sign ignored).
#[inline]
pub fn is_zero(value: Complex64) -> bool {
    value.re == 0.0 && value.im == 0.0
}

/// True when the imaginary part is exactly zero.
#[inline]
pub fn is_real(value: Complex64) -> bool {
    value.im == 0.0
}

/// True for a real value strictly below zero.
#[inline]
pub fn is_real_negative(value: Complex64) -> bool {
    is_real(value) && value.re < 0.0
}

/// True for a real value with no fractional part.
#[inline]
pub fn is_real_integer(value: Complex64) -> bool {
    is_real(value) && value.re.is_finite() && value.re.fract() == 0.0
}

/// True for a real value strictly above zero.
#[inline]
pub fn is_real_positive(value: Complex64) -> bool {
    is_real(value) && value.re > 0.0
}

/// Approximate comparisons on complex values.
pub mod float_ops {
    use super::constants::DEFAULT_EPSILON;
    use num_complex::Complex64;

    /// Check if two complex numbers are approximately equal
    #[inline]
    pub fn approx_eq(a: Complex64, b: Complex64) -> bool {
        approx_eq_eps(a, b, DEFAULT_EPSILON)
    }

    /// Check if two complex numbers are within `epsilon` of each other
    #[inline]
    pub fn approx_eq_eps(a: Complex64, b: Complex64, epsilon: f64) -> bool {
        (a - b).norm() < epsilon
    }

    /// Relative closeness, scaled by the larger magnitude (at least 1)
    #[inline]
    pub fn approx_eq_rel(a: Complex64, b: Complex64, epsilon: f64) -> bool {
        let scale = a.norm().max(b.norm()).max(1.0);
        (a - b).norm() < epsilon * scale
    }

    /// Check if a complex number is approximately zero
    #[inline]
    pub fn approx_zero(x: Complex64) -> bool {
        x.norm() < DEFAULT_EPSILON
    }
}
