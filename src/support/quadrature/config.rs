use crate::support::constraint::NonNegative;

use super::QuadratureError;

/// Convergence settings for adaptive quadrature.
///
/// Iteration stops once the summed error estimate satisfies
/// `error <= max(abs_tol, rel_tol * |value|)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureConfig {
    /// Absolute error tolerance.
    pub abs_tol: f64,

    /// Relative error tolerance.
    pub rel_tol: f64,

    /// Maximum number of subintervals the domain may be split into.
    pub max_subdivisions: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1e-200,
            rel_tol: 1e-8,
            max_subdivisions: 10_000,
        }
    }
}

impl QuadratureConfig {
    /// Returns the error target for an integral estimate of `value`.
    pub(super) fn tolerance(&self, value: f64) -> f64 {
        self.abs_tol.max(self.rel_tol * value.abs())
    }

    /// Checks that tolerances are non-negative and at least one subinterval is allowed.
    pub(super) fn validate(&self) -> Result<(), QuadratureError> {
        NonNegative::new(self.abs_tol)?;
        NonNegative::new(self.rel_tol)?;
        if self.max_subdivisions == 0 {
            return Err(QuadratureError::NoSubdivisions);
        }
        Ok(())
    }
}
