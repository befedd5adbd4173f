//! Problem formulation for wire length matching.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::Length, length::meter};

use crate::support::{constraint::NonNegative, quadrature::QuadratureConfig};

use super::super::{CoilGeometry, WireLengthError, wire_length};
use super::WoundCoil;

/// Model adapter that rewinds a fixed coil body with a given turn count.
pub(super) struct GivenWireLengthModel<'a> {
    geometry: CoilGeometry,
    quadrature: &'a QuadratureConfig,
}

impl<'a> GivenWireLengthModel<'a> {
    pub(super) fn new(geometry: CoilGeometry, quadrature: &'a QuadratureConfig) -> Self {
        Self {
            geometry,
            quadrature,
        }
    }
}

impl Model for GivenWireLengthModel<'_> {
    type Input = f64;
    type Output = WoundCoil;
    type Error = WireLengthError;

    fn call(&self, turns: &Self::Input) -> Result<Self::Output, Self::Error> {
        let geometry = self.geometry.with_turns(NonNegative::new(*turns)?);
        let wire_length = wire_length(&geometry, self.quadrature)?;
        Ok(WoundCoil {
            geometry,
            wire_length,
        })
    }
}

/// Equation problem definition for wire length matching.
///
/// Computes the residual as `achieved_length - target_length`.
pub(super) struct GivenWireLengthProblem {
    target: Length,
}

impl GivenWireLengthProblem {
    pub(super) fn new(target: Length) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for GivenWireLengthProblem {
    type Input = f64;
    type Output = WoundCoil;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let achieved = output.wire_length.value.get::<meter>();
        Ok([achieved - self.target.get::<meter>()])
    }
}
