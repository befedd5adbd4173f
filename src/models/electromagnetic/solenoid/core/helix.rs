//! Arc-length integrand of a constant-pitch helix.

use crate::support::quadrature::Integrand;
use uom::si::length::meter;

use super::CoilGeometry;

/// Speed of a point tracing the helix, parametrized by axial position.
///
/// With the axis along `x` and angular rate `ω`, the winding is
/// `(x, r·cos(ωx), r·sin(ωx))`, so its derivative has components
/// `1`, `-r·ω·sin(ωx)`, and `r·ω·cos(ωx)`. Positions and speeds are in
/// meters and meters per meter of axial travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixSpeed {
    radius: f64,
    omega: f64,
}

impl HelixSpeed {
    /// Creates the integrand for a coil geometry.
    #[must_use]
    pub fn new(geometry: &CoilGeometry) -> Self {
        Self::from_raw(geometry.radius().get::<meter>(), geometry.angular_rate().value)
    }

    /// Creates the integrand from a radius in meters and an angular rate in rad/m.
    ///
    /// Non-finite inputs are not rejected and propagate into the results.
    #[must_use]
    pub fn from_raw(radius: f64, omega: f64) -> Self {
        Self { radius, omega }
    }

    /// Returns the speed at each axial position in `xs`.
    #[must_use]
    pub fn speeds(&self, xs: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; xs.len()];
        self.eval_batch(xs, &mut out);
        out
    }
}

impl Integrand for HelixSpeed {
    fn eval(&self, x: f64) -> f64 {
        let r_omega = self.radius * self.omega;
        let (sin, cos) = (self.omega * x).sin_cos();

        let dx = 1.0;
        let dy = r_omega * -sin;
        let dz = r_omega * cos;

        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn speed_is_constant_along_axis() {
        let speed = HelixSpeed::from_raw(0.1, 2000.0);
        let expected = (1.0 + 200.0_f64.powi(2)).sqrt();

        for x in [0.0, 1e-4, 0.013, 0.05, 0.0762] {
            assert_relative_eq!(speed.eval(x), expected, max_relative = 1e-14);
        }
    }

    #[test]
    fn batch_matches_scalar() {
        let speed = HelixSpeed::from_raw(0.02, 150.0);
        let xs = [0.0, 0.25, 0.5, 0.75, 1.0];

        let batch = speed.speeds(&xs);

        assert_eq!(batch.len(), xs.len());
        for (&x, &v) in xs.iter().zip(&batch) {
            assert_eq!(v, speed.eval(x));
        }
    }

    #[test]
    fn straight_wire_has_unit_speed() {
        assert_eq!(HelixSpeed::from_raw(0.0, 500.0).eval(0.3), 1.0);
        assert_eq!(HelixSpeed::from_raw(0.1, 0.0).eval(0.3), 1.0);
    }

    #[test]
    fn non_finite_rate_propagates() {
        let speed = HelixSpeed::from_raw(0.1, f64::INFINITY);
        assert!(speed.eval(0.5).is_nan());
    }
}
