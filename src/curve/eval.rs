use std::f64::consts::PI;

use crate::config::HashConfig;
use crate::curve::sampler::CurveParameters;

/// Largest magnitude either unit coordinate can reach before scaling.
///
/// `a` lies in `[0.4, 1.6]`, so `|2 - a| <= 1.6` bounds `d` and `e`. With
/// `|h[2]| < 0.5` and `|h[3]| < 0.2` each coordinate is at most
/// `1.6 + 0.5 * 1.6 + 0.2 * 1.6 = 2.72`.
pub const UNIT_BOUND: f64 = 2.72;

/// Ordered points of one closed curve, already in render-window coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSequence {
    points: Vec<(f64, f64)>,
}

impl PointSequence {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.points.iter()
    }
}

impl From<Vec<(f64, f64)>> for PointSequence {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }
}

/// Inclusive range every coordinate produced under `config` falls in.
pub fn coordinate_bound(config: &HashConfig) -> (f64, f64) {
    let reach = UNIT_BOUND * config.scale.abs();
    (config.offset - reach, config.offset + reach)
}

/// Evaluate the curve at `config.point_count` evenly spaced angles.
pub fn evaluate(params: &CurveParameters, config: &HashConfig) -> PointSequence {
    let size = config.point_count;
    let mut points = Vec::with_capacity(size);
    if size == 0 {
        return PointSequence { points };
    }

    let step = (2.0 * PI / size as f64) * f64::from(params.harmonics);
    let h = &params.coefficients;
    let q = &params.frequencies;
    let s = &params.bases;
    let n = &params.signs;
    let [p0, p1] = params.pairs;
    let pr = params.pitch;

    for k in 0..size {
        let r = k as f64 * step;
        let b = s[6].eval(r * q[6] + s[3].eval(r * q[3]) * h[5]) * n[0];
        let a = 1.0 + b * h[0];
        let mut d = s[7].eval(r * q[7]);
        let mut e = -d;
        d *= (2.0 - a) * n[1];
        e *= (2.0 - a) * n[2];
        let c = (s[4].eval(r * q[4] + s[5].eval(r * q[5]) * h[7]) / 4.0)
            * h[6]
            * params.damping.apply(a, h[0]);
        let x = (r * pr + c).sin() * a + p0.x.eval(r * q[0]) * h[2] * d + p1.x.eval(r * q[1]) * h[3] * e;
        let y = (r * pr + c).cos() * a + p0.y.eval(r * q[0]) * h[2] * d + p1.y.eval(r * q[1]) * h[3] * e;
        points.push((x * config.scale + config.offset, y * config.scale + config.offset));
    }

    PointSequence { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::sampler::{Basis, BasisPair};
    use crate::curve::variant::{DampingForm, Variant};

    fn circle_params() -> CurveParameters {
        // all perturbation terms vanish, leaving a unit circle traced at pitch 1
        CurveParameters {
            harmonics: 1,
            pitch: 1.0,
            coefficients: [0.0; 8],
            frequencies: [0.0; 8],
            pairs: [BasisPair::SIN_COS; 2],
            bases: [Basis::Sine; 8],
            signs: [1.0; 3],
            damping: DampingForm::ShiftedDown,
        }
    }

    #[test]
    fn test_degenerate_parameters_trace_circle() {
        let config = HashConfig::for_variant(Variant::Classic);
        let points = evaluate(&circle_params(), &config);
        assert_eq!(points.len(), config.point_count);
        for &(x, y) in points.iter() {
            let dx = (x - config.offset) / config.scale;
            let dy = (y - config.offset) / config.scale;
            assert!(((dx * dx + dy * dy).sqrt() - 1.0).abs() < 1e-12);
        }
        let (x0, y0) = points.as_slice()[0];
        assert!((x0 - config.offset).abs() < 1e-12);
        assert!((y0 - (config.offset + config.scale)).abs() < 1e-12);
    }

    #[test]
    fn test_point_count_follows_config() {
        let mut config = HashConfig::for_variant(Variant::Polyline);
        config.point_count = 17;
        assert_eq!(evaluate(&circle_params(), &config).len(), 17);
        config.point_count = 0;
        assert!(evaluate(&circle_params(), &config).is_empty());
    }

    #[test]
    fn test_coordinate_bound() {
        let config = HashConfig::for_variant(Variant::Classic);
        let (lo, hi) = coordinate_bound(&config);
        assert!((lo - (200.0 - 299.2)).abs() < 1e-9);
        assert!((hi - (200.0 + 299.2)).abs() < 1e-9);
    }
}
