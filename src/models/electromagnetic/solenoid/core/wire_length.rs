//! Wire length of a helical winding.

use thiserror::Error;
use uom::si::{f64::Length, length::meter};

use crate::support::{
    constraint::ConstraintError,
    quadrature::{self, Quadrature, QuadratureConfig, QuadratureError, QuadratureStatus},
};

use super::{CoilGeometry, HelixSpeed};

/// Integrated wire length of a coil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireLength {
    /// Estimated wire length.
    pub value: Length,

    /// Estimated upper bound on the absolute error of `value`.
    pub abs_error: Length,

    /// Diagnostics from the underlying integration.
    pub quadrature: Quadrature,
}

impl WireLength {
    /// Returns `true` if the integration met its tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.quadrature.status == QuadratureStatus::Converged
    }
}

/// Errors that can occur while computing a wire length.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WireLengthError {
    /// A coil or material input violated its numeric constraint.
    #[error("invalid input")]
    Constraint(#[from] ConstraintError),

    /// The integration could not be carried out.
    #[error("quadrature failed")]
    Quadrature(#[from] QuadratureError),
}

/// Computes the wire length of a coil by integrating the helix speed
/// over the coil's axial extent.
///
/// # Errors
///
/// Returns [`WireLengthError::Quadrature`] if the integration fails.
/// Hitting the subdivision limit is not an error; see [`WireLength::converged`].
pub fn wire_length(
    geometry: &CoilGeometry,
    config: &QuadratureConfig,
) -> Result<WireLength, WireLengthError> {
    let speed = HelixSpeed::new(geometry);
    let result = quadrature::integrate(&speed, 0.0, geometry.length().get::<meter>(), config)?;

    Ok(WireLength {
        value: Length::new::<meter>(result.value),
        abs_error: Length::new::<meter>(result.abs_error),
        quadrature: result,
    })
}

/// Exact wire length of a constant-pitch coil, `length·sqrt(1 + (r·ω)²)`.
///
/// Equivalent to `turns·sqrt((2πr)² + pitch²)` for a wound coil.
#[must_use]
pub fn closed_form_wire_length(geometry: &CoilGeometry) -> Length {
    let r_omega = geometry.radius().get::<meter>() * geometry.angular_rate().value;
    geometry.length() * (1.0 + r_omega * r_omega).sqrt()
}
