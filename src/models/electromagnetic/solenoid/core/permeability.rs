//! Effective permeability of a cylindrical core.
//!
//! A finite rod magnetizes less than an infinitely long one because its own
//! poles oppose the applied field. The reduction is captured by a
//! demagnetizing factor that depends only on the rod's aspect ratio.
//! The approximation here follows Sato and Ishii,
//! J. Appl. Phys. 66, 983 (1989), <https://doi.org/10.1063/1.343481>.

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{
    f64::{Length, Ratio},
    ratio::ratio,
};

/// A solid cylindrical core of magnetic material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylindricalCore {
    radius: Constrained<Length, StrictlyPositive>,
    length: Constrained<Length, StrictlyPositive>,
    relative_permeability: Constrained<f64, StrictlyPositive>,
}

impl CylindricalCore {
    /// Creates a core from already-constrained values.
    #[must_use]
    pub fn new(
        radius: Constrained<Length, StrictlyPositive>,
        length: Constrained<Length, StrictlyPositive>,
        relative_permeability: Constrained<f64, StrictlyPositive>,
    ) -> Self {
        Self {
            radius,
            length,
            relative_permeability,
        }
    }

    /// Creates a core, checking each value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any value is not strictly positive.
    pub fn try_new(
        radius: Length,
        length: Length,
        relative_permeability: f64,
    ) -> ConstraintResult<Self> {
        Ok(Self::new(
            StrictlyPositive::new(radius)?,
            StrictlyPositive::new(length)?,
            StrictlyPositive::new(relative_permeability)?,
        ))
    }

    /// Demagnetizing factor `1 / (4n/√π + 1)`, with `n` the length-to-diameter ratio.
    #[must_use]
    pub fn demagnetizing_factor(&self) -> Ratio {
        let n = (self.length.get() / (self.radius.get() * 2.0)).get::<ratio>();
        Ratio::new::<ratio>(1.0 / (2.0 * (2.0 * n / std::f64::consts::PI.sqrt()) + 1.0))
    }

    /// Relative permeability seen by the coil, `μr / (1 + N·(μr − 1))`.
    #[must_use]
    pub fn effective_permeability(&self) -> Ratio {
        let mu_r = self.relative_permeability.get();
        let factor = self.demagnetizing_factor().get::<ratio>();
        Ratio::new::<ratio>(mu_r / (1.0 + factor * (mu_r - 1.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::millimeter;

    fn rod(radius_mm: f64, length_mm: f64, mu_r: f64) -> CylindricalCore {
        CylindricalCore::try_new(
            Length::new::<millimeter>(radius_mm),
            Length::new::<millimeter>(length_mm),
            mu_r,
        )
        .unwrap()
    }

    #[test]
    fn non_magnetic_core_is_transparent() {
        let core = rod(5.0, 76.2, 1.0);
        assert_relative_eq!(core.effective_permeability().get::<ratio>(), 1.0);
    }

    #[test]
    fn unit_aspect_ratio() {
        // n = 1, so N = 1 / (4/√π + 1).
        let core = rod(5.0, 10.0, 1000.0);
        let factor = 1.0 / (4.0 / std::f64::consts::PI.sqrt() + 1.0);

        assert_relative_eq!(core.demagnetizing_factor().get::<ratio>(), factor, max_relative = 1e-12);
        assert_relative_eq!(
            core.effective_permeability().get::<ratio>(),
            1000.0 / (1.0 + factor * 999.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn longer_rods_approach_material_permeability() {
        let mu_r = 2000.0;
        let lengths = [10.0, 100.0, 1_000.0, 100_000.0];
        let effective: Vec<f64> = lengths
            .iter()
            .map(|&l| rod(5.0, l, mu_r).effective_permeability().get::<ratio>())
            .collect();

        assert!(effective.windows(2).all(|w| w[1] > w[0]));
        assert!(effective.iter().all(|&mu| mu < mu_r));
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert!(
            CylindricalCore::try_new(
                Length::new::<millimeter>(0.0),
                Length::new::<millimeter>(10.0),
                100.0,
            )
            .is_err()
        );
        assert!(
            CylindricalCore::try_new(
                Length::new::<millimeter>(5.0),
                Length::new::<millimeter>(10.0),
                0.0,
            )
            .is_err()
        );
    }
}
