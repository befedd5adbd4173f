use twine_solvers::equation::bisection;
use uom::si::{f64::Length, length::meter};

use crate::support::quadrature::QuadratureConfig;

/// Solver configuration for matching a target wire length.
#[derive(Debug, Clone, Copy)]
pub struct GivenWireLengthConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the turn count.
    pub turns_tol: f64,

    /// Absolute tolerance for the wire length residual (achieved - target).
    pub length_tol: Length,

    /// Integration settings for each wire length evaluation.
    pub quadrature: QuadratureConfig,
}

impl Default for GivenWireLengthConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            turns_tol: 1e-12,
            length_tol: Length::new::<meter>(1e-12),
            quadrature: QuadratureConfig::default(),
        }
    }
}

impl GivenWireLengthConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.turns_tol,
            x_rel_tol: 0.0,
            residual_tol: self.length_tol.get::<meter>(),
        }
    }
}
