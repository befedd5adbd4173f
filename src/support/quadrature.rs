//! Adaptive Gauss–Kronrod quadrature.
//!
//! [`integrate`] estimates a definite integral with a 15-point Kronrod rule
//! and its embedded 7-point Gauss rule on each subinterval. The subinterval
//! with the largest error estimate is bisected until the summed error meets
//! the tolerances in [`QuadratureConfig`] or the subdivision limit is hit.
//!
//! Each refinement step samples both new halves in a single call to
//! [`Integrand::eval_batch`], so integrands with a cheap vectorized form can
//! override it. Any `Fn(f64) -> f64` is an [`Integrand`].
//!
//! # Example
//!
//! ```
//! use coil_models::support::quadrature::{QuadratureConfig, QuadratureStatus, integrate};
//!
//! let result = integrate(&|x: f64| x.sqrt(), 0.0, 1.0, &QuadratureConfig::default()).unwrap();
//!
//! assert_eq!(result.status, QuadratureStatus::Converged);
//! assert!((result.value - 2.0 / 3.0).abs() < 1e-9);
//! ```

mod config;
mod error;
mod rule;

pub use config::QuadratureConfig;
pub use error::QuadratureError;

use rule::{NODES, Segment, Workspace};

/// A function that can be sampled by [`integrate`].
pub trait Integrand {
    /// Evaluates the integrand at `x`.
    fn eval(&self, x: f64) -> f64;

    /// Evaluates the integrand at every point in `xs`, writing results to `out`.
    ///
    /// The slices have equal length. The default samples one point at a time.
    fn eval_batch(&self, xs: &[f64], out: &mut [f64]) {
        for (y, &x) in out.iter_mut().zip(xs) {
            *y = self.eval(x);
        }
    }
}

impl<F: Fn(f64) -> f64> Integrand for F {
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// How an adaptive integration finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadratureStatus {
    /// The error estimate met the requested tolerance.
    Converged,

    /// The subdivision limit was reached first.
    ///
    /// The value is the best available estimate and the error bound may be large.
    SubdivisionLimit,

    /// The worst subinterval became too narrow to bisect in floating point.
    RoundoffLimit,
}

/// Result of an adaptive integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrature {
    /// Estimated integral.
    pub value: f64,

    /// Estimated upper bound on the absolute error.
    pub abs_error: f64,

    /// Total number of integrand samples.
    pub evaluations: usize,

    /// Number of subintervals in the final partition.
    pub subdivisions: usize,

    /// Termination reason.
    pub status: QuadratureStatus,
}

impl Quadrature {
    /// Returns `(value, abs_error)`.
    #[must_use]
    pub fn as_pair(&self) -> (f64, f64) {
        (self.value, self.abs_error)
    }

    fn empty() -> Self {
        Self {
            value: 0.0,
            abs_error: 0.0,
            evaluations: 0,
            subdivisions: 0,
            status: QuadratureStatus::Converged,
        }
    }

    fn negated(self) -> Self {
        Self {
            value: -self.value,
            ..self
        }
    }
}

/// Integrates `f` over `[lower, upper]`.
///
/// Reversed bounds integrate with a sign flip and equal bounds give zero
/// without sampling `f`. Failing to converge is not an error: check
/// [`Quadrature::status`].
///
/// # Errors
///
/// Returns [`QuadratureError`] if a bound is not finite, the configuration is
/// invalid, or the integrand produces a non-finite sample.
pub fn integrate<F: Integrand + ?Sized>(
    f: &F,
    lower: f64,
    upper: f64,
    config: &QuadratureConfig,
) -> Result<Quadrature, QuadratureError> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(QuadratureError::NonFiniteBound { lower, upper });
    }
    config.validate()?;

    if lower == upper {
        return Ok(Quadrature::empty());
    }
    if upper < lower {
        return integrate(f, upper, lower, config).map(Quadrature::negated);
    }

    let mut workspace = Workspace::default();
    let mut segments = workspace.estimate(f, &[(lower, upper)])?;
    let mut evaluations = NODES;

    let status = loop {
        let (value, error) = totals(&segments);
        if error <= config.tolerance(value) {
            break QuadratureStatus::Converged;
        }
        if segments.len() >= config.max_subdivisions {
            break QuadratureStatus::SubdivisionLimit;
        }

        let worst = worst_segment(&segments);
        let Segment {
            lower: left,
            upper: right,
            ..
        } = segments[worst];
        let mid = 0.5 * (left + right);
        if !(left < mid && mid < right) {
            break QuadratureStatus::RoundoffLimit;
        }

        let halves = workspace.estimate(f, &[(left, mid), (mid, right)])?;
        evaluations += 2 * NODES;
        segments.swap_remove(worst);
        segments.extend(halves);
    };

    let (value, abs_error) = totals(&segments);
    let result = Quadrature {
        value,
        abs_error,
        evaluations,
        subdivisions: segments.len(),
        status,
    };

    match status {
        QuadratureStatus::Converged => tracing::debug!(
            value,
            abs_error,
            evaluations,
            subdivisions = result.subdivisions,
            "quadrature converged"
        ),
        _ => tracing::warn!(
            ?status,
            value,
            abs_error,
            tolerance = config.tolerance(value),
            subdivisions = result.subdivisions,
            "quadrature stopped before reaching tolerance"
        ),
    }

    Ok(result)
}

fn totals(segments: &[Segment]) -> (f64, f64) {
    segments
        .iter()
        .fold((0.0, 0.0), |(value, error), s| (value + s.value, error + s.error))
}

fn worst_segment(segments: &[Segment]) -> usize {
    segments
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.error.total_cmp(&b.error))
        .map_or(0, |(i, _)| i)
}
