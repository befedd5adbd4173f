use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur during adaptive quadrature.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadratureError {
    /// An integration bound is NaN or infinite.
    #[error("integration bounds must be finite: [{lower}, {upper}]")]
    NonFiniteBound {
        /// Lower bound as supplied.
        lower: f64,

        /// Upper bound as supplied.
        upper: f64,
    },

    /// The integrand returned NaN or an infinity at a sample point.
    #[error("integrand is not finite at x={x}: {value}")]
    NonFiniteIntegrand {
        /// Sample location.
        x: f64,

        /// Value returned by the integrand.
        value: f64,
    },

    /// A tolerance in the configuration is negative or NaN.
    #[error("invalid tolerance")]
    Tolerance(#[from] ConstraintError),

    /// The configuration allows no subintervals.
    #[error("subdivision limit must be at least 1")]
    NoSubdivisions,
}
