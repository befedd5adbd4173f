//! Solenoid coil calculations.
//!
//! The wire in a solenoid follows a constant-pitch helix. Its length is found
//! by integrating the helix speed along the coil axis with adaptive
//! quadrature. Because the speed of a constant-pitch helix does not vary along
//! the axis, [`closed_form_wire_length`] gives the same answer directly and is
//! kept as a cross-check.
//!
//! The remaining functions cover what the wire length feeds into: winding
//! resistance, the effective permeability of a rod core, and the field inside
//! the coil.

mod field;
mod geometry;
mod given_wire_length;
mod helix;
mod permeability;
mod wire;
mod wire_length;

pub use field::magnetic_field;
pub use geometry::CoilGeometry;
pub use given_wire_length::{
    GivenWireLengthConfig, GivenWireLengthError, WoundCoil, given_wire_length,
};
pub use helix::HelixSpeed;
pub use permeability::CylindricalCore;
pub use wire::Wire;
pub use wire_length::{WireLength, WireLengthError, closed_form_wire_length, wire_length};
