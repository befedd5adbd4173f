//! Prints the wire length of two reference coils.
//!
//! Each line is `(length, error)` in meters, where `error` is the estimated
//! absolute error of the integration.
//!
//! Run with `cargo run --example coil_wire_length`.

use std::error::Error;

use coil_models::models::electromagnetic::solenoid::{CoilGeometry, CoilWireLength};
use twine_core::Model;
use uom::si::{f64::Length, length::meter};

/// Coil length (m), coil radius (m), and turn count.
const COILS: [(f64, f64, f64); 2] = [(0.0762, 0.1, 30.0), (7.62e-2, 0.15875e-2, 56.0)];

fn wire_length(coil_length: f64, coil_radius: f64, turns: f64) -> Result<(f64, f64), Box<dyn Error>> {
    let geometry = CoilGeometry::try_new(
        Length::new::<meter>(coil_length),
        Length::new::<meter>(coil_radius),
        turns,
    )?;
    let result = CoilWireLength::default().call(&geometry)?;
    Ok(result.quadrature.as_pair())
}

fn main() -> Result<(), Box<dyn Error>> {
    for (coil_length, coil_radius, turns) in COILS {
        println!("{:?}", wire_length(coil_length, coil_radius, turns)?);
    }
    Ok(())
}
