//! # Preconditioning and Boundary Policy
//!
//! `(x + y)^alpha` is recast as `A^alpha * (1 + z)^alpha`, where `A` is the
//! operand of larger magnitude and `z = B / A` is the contraction-mapped ratio of
//! the other operand to it. The boundary policy then decides whether `|z|` is
//! small enough for the series to converge within a practical budget.

use crate::config::PowerConfig;
use num_complex::Complex64;

/// Dominant operand and the ratio of the minor operand to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preconditioned {
    /// Operand with the larger magnitude (`A`)
    pub base: Complex64,
    /// `B / A`, with `|z| < 1` by construction
    pub ratio: Complex64,
    /// `|z|`
    pub ratio_abs: f64,
}

/// Split `x + y` into a dominant operand and a ratio.
///
/// Returns `None` when `|x| == |y|`; the edge-case resolver handles that input
/// before this stage is reached.
pub fn precondition(x: Complex64, y: Complex64) -> Option<Preconditioned> {
    let (ax, ay) = (x.norm(), y.norm());

    let (base, minor) = if ax < ay {
        (y, x)
    } else if ax > ay {
        (x, y)
    } else {
        return None;
    };

    // Dividing by |A|^2 directly overflows above ~1e154 and goes subnormal
    // below ~1e-154, so both operands are scaled to unit magnitude first.
    let scale = base.norm();
    let ratio = (minor / scale) / (base / scale);
    Some(Preconditioned {
        base,
        ratio,
        ratio_abs: ratio.norm(),
    })
}

/// Outcome of the boundary policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesPlan {
    /// `|z|` exceeds the threshold; evaluate `exp(alpha * ln(x + y))` directly
    Fallback,
    /// Sum the series with this many terms at most
    Sum {
        /// Term budget after the near-boundary extension
        effective_max_terms: usize,
    },
}

/// Decide between the series and the direct formula for a ratio magnitude.
pub fn plan_series(ratio_abs: f64, config: &PowerConfig) -> SeriesPlan {
    if config.exceeds_boundary(ratio_abs) {
        return SeriesPlan::Fallback;
    }

    let effective_max_terms = config.effective_max_terms(ratio_abs);
    if effective_max_terms > config.max_terms {
        log::debug!(
            "|z| = {:.4} in near-boundary band, term budget extended to {}",
            ratio_abs,
            effective_max_terms
        );
    }
    SeriesPlan::Sum {
        effective_max_terms,
    }
}
