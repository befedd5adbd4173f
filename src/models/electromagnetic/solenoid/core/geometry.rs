//! Coil winding geometry.

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
    units::{ReciprocalLength, angular_rate},
};
use uom::si::f64::Length;

/// Geometry of a constant-pitch helical winding.
///
/// The wire is wound at `radius` around an axis, completing `turns` full
/// revolutions while advancing `length` along that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilGeometry {
    length: Constrained<Length, StrictlyPositive>,
    radius: Constrained<Length, NonNegative>,
    turns: Constrained<f64, NonNegative>,
}

impl CoilGeometry {
    /// Creates a geometry from already-constrained values.
    #[must_use]
    pub fn new(
        length: Constrained<Length, StrictlyPositive>,
        radius: Constrained<Length, NonNegative>,
        turns: Constrained<f64, NonNegative>,
    ) -> Self {
        Self {
            length,
            radius,
            turns,
        }
    }

    /// Creates a geometry, checking each value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `length` is not strictly positive, or if `radius` or
    /// `turns` is negative or NaN.
    pub fn try_new(length: Length, radius: Length, turns: f64) -> ConstraintResult<Self> {
        Ok(Self::new(
            StrictlyPositive::new(length)?,
            NonNegative::new(radius)?,
            NonNegative::new(turns)?,
        ))
    }

    /// Axial length of the coil.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length.get()
    }

    /// Radius of the winding.
    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius.get()
    }

    /// Number of complete turns over the axial length.
    #[must_use]
    pub fn turns(&self) -> f64 {
        self.turns.get()
    }

    /// Returns a copy with a different turn count.
    #[must_use]
    pub fn with_turns(self, turns: Constrained<f64, NonNegative>) -> Self {
        Self { turns, ..self }
    }

    /// Angle swept per unit of axial distance, `2π·turns / length`.
    #[must_use]
    pub fn angular_rate(&self) -> ReciprocalLength {
        angular_rate(self.turns(), self.length())
    }

    /// Axial advance per turn, or `None` for an unwound coil.
    #[must_use]
    pub fn pitch(&self) -> Option<Length> {
        let turns = self.turns();
        (turns > 0.0).then(|| self.length() / turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::{centimeter, meter, millimeter};

    use crate::support::constraint::ConstraintError;

    #[test]
    fn pitch_and_rate() {
        let geometry = CoilGeometry::try_new(
            Length::new::<centimeter>(7.62),
            Length::new::<millimeter>(1.5875),
            56.0,
        )
        .unwrap();

        let pitch = geometry.pitch().unwrap();
        assert_relative_eq!(pitch.get::<meter>(), 0.0762 / 56.0, max_relative = 1e-12);
        assert_relative_eq!(
            geometry.angular_rate().value * pitch.get::<meter>(),
            std::f64::consts::TAU,
            max_relative = 1e-12
        );
    }

    #[test]
    fn unwound_coil_has_no_pitch() {
        let geometry =
            CoilGeometry::try_new(Length::new::<meter>(1.0), Length::new::<meter>(0.1), 0.0)
                .unwrap();

        assert!(geometry.pitch().is_none());
        assert_eq!(geometry.angular_rate().value, 0.0);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let zero_length =
            CoilGeometry::try_new(Length::new::<meter>(0.0), Length::new::<meter>(0.1), 30.0);
        assert_eq!(zero_length, Err(ConstraintError::Zero));

        let negative_radius =
            CoilGeometry::try_new(Length::new::<meter>(1.0), Length::new::<meter>(-0.1), 30.0);
        assert_eq!(negative_radius, Err(ConstraintError::Negative));

        let nan_turns =
            CoilGeometry::try_new(Length::new::<meter>(1.0), Length::new::<meter>(0.1), f64::NAN);
        assert_eq!(nan_turns, Err(ConstraintError::NotANumber));
    }

    #[test]
    fn with_turns_keeps_dimensions() {
        let geometry =
            CoilGeometry::try_new(Length::new::<meter>(0.5), Length::new::<meter>(0.02), 10.0)
                .unwrap();
        let rewound = geometry.with_turns(NonNegative::new(20.0).unwrap());

        assert_eq!(rewound.length(), geometry.length());
        assert_eq!(rewound.radius(), geometry.radius());
        assert_relative_eq!(rewound.turns(), 20.0);
    }
}
