//! # Preconditioned Binomial Power
//!
//! Computes the complex power `(x + y)^alpha` through a preconditioned
//! generalized binomial series rather than directly as `exp(alpha * ln(x + y))`.
//!
//! Direct evaluation loses accuracy when `x` and `y` nearly cancel and picks an
//! arbitrary-looking branch when the sum crosses the negative real axis. Here the
//! operand of larger magnitude `A` is factored out and the ratio `z = B / A`
//! (with `|z| < 1`) is expanded:
//!
//! ```text
//! (x + y)^alpha = A^alpha * (1 + z)^alpha = A^alpha * sum_k C(alpha, k) z^k
//! ```
//!
//! ## Key Features
//!
//! - **Edge-case resolution**: zero operands, cancelling operands and equal
//!   magnitudes are settled before any series work
//! - **Real odd roots**: `(-8)^(1/3)` evaluates to `-2`, not the principal `1 + i*sqrt(3)`
//! - **Boundary policy**: ratios too close to the unit circle use the direct formula
//! - **Bounded iteration**: the term budget is fixed per call, never open-ended
//! - **Structured advisories**: non-fatal conditions are returned with the value
//!   and mirrored to the `log` facade
//!
//! ## Quick Start
//!
//! ```rust
//! use binomial_power::{evaluate_power, binomial_power, PowerConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Value only
//!     let root = binomial_power(1.0, 8.0, 1.0 / 3.0)?;
//!     assert!((root.re - 9f64.powf(1.0 / 3.0)).abs() < 1e-12);
//!
//!     // Value with diagnostics
//!     let eval = evaluate_power(1.0, 1.1, 1.0 / 3.0, &PowerConfig::default())?;
//!     if eval.diagnostics.used_fallback {
//!         for advisory in &eval.diagnostics.advisories {
//!             println!("advisory: {}", advisory);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! [`PowerEvaluator`] runs four stages in order, returning early from any of them:
//! [`edge_cases`], [`preconditioning`] (dominant operand and boundary policy),
//! [`series`], and composition with `A^alpha`. The only hard failure is
//! [`PowerEvaluationError::DomainError`], raised for an exact zero sum with a
//! non-positive or complex exponent.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod math_utils;
pub mod rational;
pub mod results;

// Evaluation stages
pub mod edge_cases;
pub mod evaluator;
pub mod preconditioning;
pub mod series;

// Re-exports for convenience - main public API
pub use config::PowerConfig;
pub use diagnostics::{Advisory, AdvisoryCategory};
pub use errors::{PowerEvaluationError, PowerResult};
pub use evaluator::{binomial_power, evaluate_power, PowerEvaluator};
pub use results::{EvaluationDiagnostics, PowerEvaluation, Resolution};

// Stage-level exports
pub use edge_cases::resolve_edge_case;
pub use preconditioning::{plan_series, precondition, Preconditioned, SeriesPlan};
pub use rational::{limit_denominator, Rational};
pub use series::{sum_binomial_series, SeriesSummation};

// Mathematical utilities exports
pub use math_utils::{
    float_ops::{approx_eq, approx_eq_eps, approx_eq_rel, approx_zero},
    principal_pow,
};

pub use num_complex::Complex64;
