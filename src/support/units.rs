//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (length, resistance, flux
//! density, and so on). This module provides the quantities and constants that
//! coil modeling needs but [`uom`] doesn't include.

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Length, Ratio},
        ratio::ratio,
    },
    typenum::{N1, Z0},
};

/// Reciprocal length, 1/m in SI.
///
/// Used for the angular rate of a helix per unit of axial distance
/// (radians per meter, with radians treated as dimensionless).
pub type ReciprocalLength = Quantity<ISQ<N1, Z0, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Magnetic permeability of free space, H/m (CODATA 2018).
pub const VACUUM_PERMEABILITY: f64 = 1.256_637_062_12e-6;

/// Returns the angular rate `2π·turns / length` of a helix.
///
/// The result is in radians per unit of axial distance.
/// A zero `length` yields a non-finite rate.
#[must_use]
pub fn angular_rate(turns: f64, length: Length) -> ReciprocalLength {
    Ratio::new::<ratio>(std::f64::consts::TAU * turns) / length
}
