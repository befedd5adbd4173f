use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Length;

use super::super::WireLengthError;

/// Errors that can occur while solving for the turns that give a target wire length.
#[derive(Debug, Error)]
pub enum GivenWireLengthError {
    /// The target is shorter than the coil itself.
    ///
    /// Even an unwound coil needs a straight wire spanning its axial length.
    #[error("target wire length {target:?} is shorter than the coil length {minimum:?}")]
    TargetTooShort {
        /// Requested wire length.
        target: Length,

        /// Axial length of the coil.
        minimum: Length,
    },

    /// The coil has zero radius, so winding adds no length.
    #[error("a coil with zero radius cannot reach a longer wire length")]
    ZeroRadius,

    /// A wire length evaluation failed.
    #[error("wire length evaluation failed")]
    WireLength(#[from] WireLengthError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best wire length residual achieved.
        residual: Length,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
