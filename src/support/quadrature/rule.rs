//! The 15-point Kronrod rule with its embedded 7-point Gauss rule.

use super::{Integrand, QuadratureError};

/// Number of integrand samples per subinterval.
pub(super) const NODES: usize = 15;

/// Kronrod abscissae on `[0, 1]`, outermost first.
///
/// Odd indices are shared with the 7-point Gauss rule; the last entry is the
/// interval center.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];

/// Kronrod weights, paired with [`XGK`].
const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

/// Gauss weights for `XGK[1]`, `XGK[3]`, `XGK[5]`, and the center.
const WG: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

/// Integral and error estimate over one subinterval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Segment {
    pub(super) lower: f64,
    pub(super) upper: f64,
    pub(super) value: f64,
    pub(super) error: f64,
}

/// Reusable sample buffers for batched evaluation.
#[derive(Debug, Default)]
pub(super) struct Workspace {
    nodes: Vec<f64>,
    values: Vec<f64>,
}

impl Workspace {
    /// Estimates every interval in `bounds` with a single batched integrand call.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::NonFiniteIntegrand`] if any sample is NaN or infinite.
    pub(super) fn estimate<F: Integrand + ?Sized>(
        &mut self,
        f: &F,
        bounds: &[(f64, f64)],
    ) -> Result<Vec<Segment>, QuadratureError> {
        self.nodes.clear();
        for &(lower, upper) in bounds {
            push_nodes(&mut self.nodes, lower, upper);
        }

        self.values.clear();
        self.values.resize(self.nodes.len(), 0.0);
        f.eval_batch(&self.nodes, &mut self.values);

        if let Some(i) = self.values.iter().position(|v| !v.is_finite()) {
            return Err(QuadratureError::NonFiniteIntegrand {
                x: self.nodes[i],
                value: self.values[i],
            });
        }

        Ok(bounds
            .iter()
            .zip(self.values.chunks_exact(NODES))
            .map(|(&(lower, upper), samples)| kronrod15(lower, upper, samples))
            .collect())
    }
}

/// Appends the 15 sample locations of `[lower, upper]`.
///
/// Order: center, then `center - h·XGK[j]`, `center + h·XGK[j]` for each `j < 7`.
fn push_nodes(nodes: &mut Vec<f64>, lower: f64, upper: f64) {
    let center = 0.5 * (lower + upper);
    let half = 0.5 * (upper - lower);

    nodes.push(center);
    for x in &XGK[..7] {
        let offset = half * x;
        nodes.push(center - offset);
        nodes.push(center + offset);
    }
}

/// Applies the Kronrod/Gauss pair to samples laid out by [`push_nodes`].
///
/// The error estimate follows QUADPACK's `qk15`: the raw `|K15 - G7|`
/// difference is rescaled against the integrand's spread and floored by the
/// achievable round-off.
fn kronrod15(lower: f64, upper: f64, samples: &[f64]) -> Segment {
    let half = 0.5 * (upper - lower);
    let abs_half = half.abs();

    let f_center = samples[0];
    let pair = |j: usize| (samples[1 + 2 * j], samples[2 + 2 * j]);

    let mut gauss = f_center * WG[3];
    let mut kronrod = f_center * WGK[7];
    let mut abs_sum = kronrod.abs();

    for j in 0..7 {
        let (left, right) = pair(j);
        kronrod += WGK[j] * (left + right);
        abs_sum += WGK[j] * (left.abs() + right.abs());
        if j % 2 == 1 {
            gauss += WG[j / 2] * (left + right);
        }
    }

    let mean = 0.5 * kronrod;
    let mut spread = WGK[7] * (f_center - mean).abs();
    for j in 0..7 {
        let (left, right) = pair(j);
        spread += WGK[j] * ((left - mean).abs() + (right - mean).abs());
    }

    let value = kronrod * half;
    let abs_integral = abs_sum * abs_half;
    let spread = spread * abs_half;
    let mut error = ((kronrod - gauss) * half).abs();

    if spread != 0.0 && error != 0.0 {
        error = spread * (200.0 * error / spread).powf(1.5).min(1.0);
    }
    if abs_integral > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        error = error.max(50.0 * f64::EPSILON * abs_integral);
    }

    Segment {
        lower,
        upper,
        value,
        error,
    }
}
