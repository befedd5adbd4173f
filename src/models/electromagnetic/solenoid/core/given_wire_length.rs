//! Iterative solver for the turn count that yields a target wire length.
//!
//! The coil body (axial length and radius) is held fixed while the number of
//! turns is varied until the integrated wire length matches the target.

mod config;
mod error;
mod problem;

pub use config::GivenWireLengthConfig;
pub use error::GivenWireLengthError;

use std::{cmp::Ordering, f64::consts::TAU};

use twine_solvers::equation::bisection;
use uom::si::{f64::Length, length::meter};

use crate::support::constraint::NonNegative;

use super::{CoilGeometry, WireLength, wire_length};

use problem::{GivenWireLengthModel, GivenWireLengthProblem};

/// A coil geometry together with its integrated wire length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WoundCoil {
    /// Coil geometry, including the solved turn count.
    pub geometry: CoilGeometry,

    /// Wire length for `geometry`.
    pub wire_length: WireLength,
}

/// Finds the number of turns for which `coil` uses `target` length of wire.
///
/// The turn count of `coil` is ignored; only its length and radius are used.
/// Bisection runs between zero turns (a straight wire) and the count at which
/// the circumferential length alone reaches the target.
///
/// # Errors
///
/// Returns a [`GivenWireLengthError`] if the target is shorter than the coil,
/// the coil has zero radius, a wire length evaluation fails, or the solver
/// fails to converge.
pub fn given_wire_length(
    coil: &CoilGeometry,
    target: Length,
    config: &GivenWireLengthConfig,
) -> Result<WoundCoil, GivenWireLengthError> {
    let minimum = coil.length();
    match target.partial_cmp(&minimum) {
        Some(Ordering::Greater) => {}
        Some(Ordering::Equal) => {
            let geometry = coil.with_turns(NonNegative::zero());
            let wire_length = wire_length(&geometry, &config.quadrature)?;
            return Ok(WoundCoil {
                geometry,
                wire_length,
            });
        }
        Some(Ordering::Less) | None => {
            return Err(GivenWireLengthError::TargetTooShort { target, minimum });
        }
    }

    let radius = coil.radius().get::<meter>();
    if radius == 0.0 {
        return Err(GivenWireLengthError::ZeroRadius);
    }
    let max_turns = target.get::<meter>() / (TAU * radius);

    let model = GivenWireLengthModel::new(*coil, &config.quadrature);
    let problem = GivenWireLengthProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, max_turns],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A failed evaluation is treated as overshooting the target,
            // steering bisection toward fewer turns.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenWireLengthError::MaxIters {
            residual: Length::new::<meter>(solution.residual),
            iters: solution.iters,
        });
    }

    tracing::debug!(
        turns = solution.snapshot.output.geometry.turns(),
        iters = solution.iters,
        "matched target wire length"
    );

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::centimeter;

    use crate::models::electromagnetic::solenoid::core::closed_form_wire_length;

    fn coil(turns: f64) -> CoilGeometry {
        CoilGeometry::try_new(
            Length::new::<centimeter>(7.62),
            Length::new::<centimeter>(10.0),
            turns,
        )
        .unwrap()
    }

    #[test]
    fn roundtrip() {
        let target = closed_form_wire_length(&coil(30.0));

        let result = given_wire_length(&coil(0.0), target, &GivenWireLengthConfig::default())
            .expect("wire length solve should succeed");

        assert_relative_eq!(result.geometry.turns(), 30.0, max_relative = 1e-9);
        assert_relative_eq!(
            result.wire_length.value.get::<meter>(),
            target.get::<meter>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn fractional_turns() {
        let target = Length::new::<meter>(5.0);

        let result = given_wire_length(&coil(12.0), target, &GivenWireLengthConfig::default())
            .expect("wire length solve should succeed");

        let expected = (5.0_f64.powi(2) - 0.0762_f64.powi(2)).sqrt() / (TAU * 0.1);
        assert_relative_eq!(result.geometry.turns(), expected, max_relative = 1e-9);
    }

    #[test]
    fn straight_wire_needs_no_turns() {
        let target = Length::new::<centimeter>(7.62);

        let result = given_wire_length(&coil(5.0), target, &GivenWireLengthConfig::default())
            .expect("straight wire should succeed");

        assert_eq!(result.geometry.turns(), 0.0);
        assert_relative_eq!(result.wire_length.value.get::<meter>(), 0.0762, max_relative = 1e-12);
    }

    #[test]
    fn target_shorter_than_coil() {
        let err = given_wire_length(
            &coil(5.0),
            Length::new::<centimeter>(5.0),
            &GivenWireLengthConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, GivenWireLengthError::TargetTooShort { .. }));
    }

    #[test]
    fn zero_radius_cannot_grow() {
        let straight = CoilGeometry::try_new(
            Length::new::<centimeter>(7.62),
            Length::new::<centimeter>(0.0),
            10.0,
        )
        .unwrap();

        let err = given_wire_length(
            &straight,
            Length::new::<meter>(1.0),
            &GivenWireLengthConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, GivenWireLengthError::ZeroRadius));
    }
}
