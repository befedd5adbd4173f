//! On-axis magnetic field of a long solenoid.

use crate::support::units::VACUUM_PERMEABILITY;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, MagneticFluxDensity, Ratio},
    length::meter,
    magnetic_flux_density::tesla,
    ratio::ratio,
};

use super::CoilGeometry;

/// Flux density inside a solenoid, `μ0·μ_eff·(turns / length)·current`.
///
/// `effective_permeability` is the relative permeability of the core as seen
/// by the coil; use one for an air core.
#[must_use]
pub fn magnetic_field(
    geometry: &CoilGeometry,
    effective_permeability: Ratio,
    current: ElectricCurrent,
) -> MagneticFluxDensity {
    let turns_per_meter = geometry.turns() / geometry.length().get::<meter>();
    MagneticFluxDensity::new::<tesla>(
        VACUUM_PERMEABILITY
            * effective_permeability.get::<ratio>()
            * turns_per_meter
            * current.get::<ampere>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, magnetic_flux_density::millitesla};

    fn air() -> Ratio {
        Ratio::new::<ratio>(1.0)
    }

    #[test]
    fn air_core_solenoid() {
        // 1000 turns per meter at 1 A gives μ0·1000 T.
        let geometry =
            CoilGeometry::try_new(Length::new::<meter>(0.5), Length::new::<meter>(0.02), 500.0)
                .unwrap();

        let field = magnetic_field(&geometry, air(), ElectricCurrent::new::<ampere>(1.0));

        assert_relative_eq!(
            field.get::<millitesla>(),
            VACUUM_PERMEABILITY * 1000.0 * 1e3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn scales_with_core_and_current() {
        let geometry =
            CoilGeometry::try_new(Length::new::<meter>(0.0762), Length::new::<meter>(0.01), 56.0)
                .unwrap();

        let base = magnetic_field(&geometry, air(), ElectricCurrent::new::<ampere>(1.0));
        let cored = magnetic_field(
            &geometry,
            Ratio::new::<ratio>(25.0),
            ElectricCurrent::new::<ampere>(2.0),
        );

        assert_relative_eq!(
            cored.get::<tesla>(),
            50.0 * base.get::<tesla>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn unwound_coil_has_no_field() {
        let geometry =
            CoilGeometry::try_new(Length::new::<meter>(0.1), Length::new::<meter>(0.01), 0.0)
                .unwrap();
        let field = magnetic_field(&geometry, air(), ElectricCurrent::new::<ampere>(5.0));
        assert_eq!(field.get::<tesla>(), 0.0);
    }
}
