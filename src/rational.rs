//! # Bounded-Denominator Rational Approximation
//!
//! Recognises real exponents that are (close to) rational with a small
//! denominator. The edge-case resolver uses the parity of the denominator to
//! decide whether a negative real base has a real odd root.
//!
//! The approximation runs the continued-fraction expansion over the *exact*
//! binary value of the `f64` (a dyadic rational), so the result does not depend
//! on rounding inside the expansion. Expansion stops at the last convergent whose
//! denominator fits the bound; the final answer is the closer of that convergent
//! and the bounding semiconvergent.

use std::fmt;

/// Dyadic denominators beyond `2^MAX_EXACT_SHIFT` are not expanded.
const MAX_EXACT_SHIFT: i32 = 125;

/// Largest left shift applied to a 53-bit mantissa; integers up to `2^123`.
const MAX_INTEGER_SHIFT: i32 = 70;

/// A reduced fraction `numerator / denominator` with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    /// Signed numerator
    pub numerator: i128,
    /// Positive denominator
    pub denominator: i128,
}

impl Rational {
    /// Whether the denominator is odd (an odd root of a negative real is real).
    pub fn has_odd_denominator(&self) -> bool {
        self.denominator % 2 == 1
    }

    /// Floating-point value of the fraction.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Exact value of a finite `f64` as `(numerator, 2^shift)` in lowest terms.
///
/// Returns `None` for NaN, infinities, magnitudes of `2^123` and above, and
/// values whose denominator would exceed `2^MAX_EXACT_SHIFT`.
fn exact_ratio(value: f64) -> Option<Rational> {
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        return Some(Rational {
            numerator: 0,
            denominator: 1,
        });
    }

    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);

    let (mut mantissa, mut exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };

    let shift = mantissa.trailing_zeros() as i32;
    mantissa >>= shift;
    exponent += shift;

    let signed = if negative {
        -(mantissa as i128)
    } else {
        mantissa as i128
    };

    if exponent >= 0 {
        if exponent > MAX_INTEGER_SHIFT {
            return None;
        }
        return Some(Rational {
            numerator: signed << exponent,
            denominator: 1,
        });
    }

    if -exponent > MAX_EXACT_SHIFT {
        return None;
    }

    Some(Rational {
        numerator: signed,
        denominator: 1i128 << (-exponent),
    })
}

/// Closest fraction to `value` whose denominator does not exceed `max_denominator`.
///
/// Returns `None` when `value` is not finite, when `max_denominator < 1`, or
/// when the answer cannot be formed exactly in `i128`: `|value| >= 2^123`, or
/// `|value| < 2^-73` with a bound large enough that `0/1` is not the closest
/// fraction.
///
/// # Example
/// ```rust
/// use binomial_power::rational::limit_denominator;
///
/// let third = limit_denominator(1.0 / 3.0, 1000).unwrap();
/// assert_eq!((third.numerator, third.denominator), (1, 3));
/// assert!(third.has_odd_denominator());
///
/// let pi = limit_denominator(std::f64::consts::PI, 1000).unwrap();
/// assert_eq!((pi.numerator, pi.denominator), (355, 113));
/// ```
pub fn limit_denominator(value: f64, max_denominator: i128) -> Option<Rational> {
    if max_denominator < 1 {
        return None;
    }

    let exact = match exact_ratio(value) {
        Some(exact) => exact,
        // Nothing but 0/1 lies within 1/(2 * max_denominator) of zero
        None if value.is_finite() && value.abs() * 2.0 * max_denominator as f64 <= 1.0 => {
            return Some(Rational {
                numerator: 0,
                denominator: 1,
            })
        }
        None => return None,
    };
    if exact.denominator <= max_denominator {
        return Some(exact);
    }

    let (mut p0, mut q0, mut p1, mut q1) = (0i128, 1i128, 1i128, 0i128);
    let (mut n, mut d) = (exact.numerator, exact.denominator);

    while d != 0 {
        let a = n.div_euclid(d);
        let q2 = q0 + a * q1;
        if q2 > max_denominator {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
        (n, d) = (d, n - a * d);
    }

    // The first step always succeeds (q2 = 1), so q1 >= 1 here.
    let k = (max_denominator - q0) / q1;
    let semiconvergent = Rational {
        numerator: p0 + k * p1,
        denominator: q0 + k * q1,
    };
    let convergent = Rational {
        numerator: p1,
        denominator: q1,
    };

    // An overflowing product is certainly larger than the dyadic denominator
    let convergent_is_closer = d
        .checked_mul(2 * semiconvergent.denominator)
        .map_or(false, |scaled| scaled <= exact.denominator);
    if convergent_is_closer {
        Some(convergent)
    } else {
        Some(semiconvergent)
    }
}
