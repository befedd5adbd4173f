//! Electrical properties of the winding wire.

use std::f64::consts::PI;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive};
use uom::si::f64::{Area, ElectricalResistance, ElectricalResistivity, Length};

/// Round wire used to wind a coil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wire {
    resistivity: Constrained<ElectricalResistivity, NonNegative>,
    diameter: Constrained<Length, StrictlyPositive>,
}

impl Wire {
    /// Creates a wire from already-constrained values.
    #[must_use]
    pub fn new(
        resistivity: Constrained<ElectricalResistivity, NonNegative>,
        diameter: Constrained<Length, StrictlyPositive>,
    ) -> Self {
        Self {
            resistivity,
            diameter,
        }
    }

    /// Creates a wire, checking each value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `resistivity` is negative or `diameter` is not strictly positive.
    pub fn try_new(resistivity: ElectricalResistivity, diameter: Length) -> ConstraintResult<Self> {
        Ok(Self::new(
            NonNegative::new(resistivity)?,
            StrictlyPositive::new(diameter)?,
        ))
    }

    /// Conductor cross-sectional area.
    #[must_use]
    pub fn cross_section(&self) -> Area {
        let radius = self.diameter.get() / 2.0;
        radius * radius * PI
    }

    /// Resistance of `length` of this wire, `ρ·length / area`.
    #[must_use]
    pub fn resistance(&self, length: Length) -> ElectricalResistance {
        self.resistivity.get() * length / self.cross_section()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_millimeter, electrical_resistance::ohm, electrical_resistivity::ohm_meter,
        length::{meter, millimeter},
    };

    fn copper(diameter_mm: f64) -> Wire {
        Wire::try_new(
            ElectricalResistivity::new::<ohm_meter>(1.68e-8),
            Length::new::<millimeter>(diameter_mm),
        )
        .unwrap()
    }

    #[test]
    fn cross_section_of_round_wire() {
        let wire = copper(2.0);
        assert_relative_eq!(wire.cross_section().get::<square_millimeter>(), PI, max_relative = 1e-12);
    }

    #[test]
    fn copper_resistance() {
        // 18.85 m of 0.5 mm copper.
        let wire = copper(0.5);
        let resistance = wire.resistance(Length::new::<meter>(18.85));

        let area = PI * 0.25e-3 * 0.25e-3;
        assert_relative_eq!(
            resistance.get::<ohm>(),
            1.68e-8 * 18.85 / area,
            max_relative = 1e-12
        );
    }

    #[test]
    fn resistance_scales_with_length() {
        let wire = copper(1.0);
        let short = wire.resistance(Length::new::<meter>(1.0));
        let long = wire.resistance(Length::new::<meter>(3.0));
        assert_relative_eq!(long.get::<ohm>(), 3.0 * short.get::<ohm>(), max_relative = 1e-12);
    }

    #[test]
    fn superconductor_has_no_resistance() {
        let wire = Wire::try_new(
            ElectricalResistivity::new::<ohm_meter>(0.0),
            Length::new::<millimeter>(1.0),
        )
        .unwrap();
        assert_eq!(wire.resistance(Length::new::<meter>(100.0)).get::<ohm>(), 0.0);
    }

    #[test]
    fn rejects_zero_diameter() {
        assert!(
            Wire::try_new(
                ElectricalResistivity::new::<ohm_meter>(1.68e-8),
                Length::new::<millimeter>(0.0),
            )
            .is_err()
        );
    }
}
