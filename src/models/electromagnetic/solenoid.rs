//! Solenoid models.
//!
//! This module provides [`twine_core::Model`] implementations for solenoid
//! coils. The computational core is in the internal `core` module; its
//! functions and types are re-exported here.
//!
//! - [`CoilWireLength`]: wire length of a coil geometry.
//! - [`Solenoid`]: wire length, resistance, and field of a wound solenoid.

mod core;

pub use self::core::{
    CoilGeometry, CylindricalCore, GivenWireLengthConfig, GivenWireLengthError, HelixSpeed,
    Wire, WireLength, WireLengthError, WoundCoil, closed_form_wire_length, given_wire_length,
    magnetic_field, wire_length,
};

use twine_core::Model;
use uom::si::{
    f64::{ElectricCurrent, ElectricalResistance, MagneticFluxDensity, Ratio},
    ratio::ratio,
};

use crate::support::quadrature::QuadratureConfig;

/// Computes the wire length of a [`CoilGeometry`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CoilWireLength {
    /// Integration settings.
    pub quadrature: QuadratureConfig,
}

impl CoilWireLength {
    /// Creates the model with the given integration settings.
    #[must_use]
    pub fn new(quadrature: QuadratureConfig) -> Self {
        Self { quadrature }
    }
}

impl Model for CoilWireLength {
    type Input = CoilGeometry;
    type Output = WireLength;
    type Error = WireLengthError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        wire_length(input, &self.quadrature)
    }
}

/// Inputs to the [`Solenoid`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolenoidInput {
    /// Winding geometry.
    pub geometry: CoilGeometry,

    /// Wire the coil is wound with.
    pub wire: Wire,

    /// Magnetic core, or `None` for an air core.
    pub core: Option<CylindricalCore>,

    /// Drive current.
    pub current: ElectricCurrent,
}

/// Outputs of the [`Solenoid`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolenoidOutput {
    /// Integrated wire length.
    pub wire_length: WireLength,

    /// Resistance of the winding.
    pub resistance: ElectricalResistance,

    /// Relative permeability of the core as seen by the coil.
    pub effective_permeability: Ratio,

    /// Flux density inside the coil.
    pub magnetic_field: MagneticFluxDensity,
}

/// Evaluates a wound solenoid: wire length, resistance, and magnetic field.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solenoid {
    /// Integration settings for the wire length.
    pub quadrature: QuadratureConfig,
}

impl Model for Solenoid {
    type Input = SolenoidInput;
    type Output = SolenoidOutput;
    type Error = WireLengthError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let wire_length = wire_length(&input.geometry, &self.quadrature)?;
        let effective_permeability = input
            .core
            .map_or(Ratio::new::<ratio>(1.0), |core| core.effective_permeability());

        Ok(SolenoidOutput {
            resistance: input.wire.resistance(wire_length.value),
            magnetic_field: magnetic_field(&input.geometry, effective_permeability, input.current),
            effective_permeability,
            wire_length,
        })
    }
}
