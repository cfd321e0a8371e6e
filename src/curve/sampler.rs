//! Seeded parameter sampling.
//!
//! Every random decision comes from one generator in a fixed order: harmonic
//! coin, six coefficients, six coefficient sign flips, the pitch, two paired
//! frequencies, six single frequencies (choice coin, pool pop, negation coin),
//! and finally three sign multipliers. Changing that order changes every image.

use rand::Rng;

use crate::config::HashConfig;
use crate::curve::error::{CurveError, CurveResult};
use crate::curve::pool::SamplingPool;
use crate::curve::seed::{seeded_rng, CurveRng};
use crate::curve::variant::{DampingForm, SignMode, VariantProfile};

/// One of the two trigonometric basis functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    Sine,
    Cosine,
}

impl Basis {
    #[inline]
    pub fn eval(self, t: f64) -> f64 {
        match self {
            Basis::Sine => t.sin(),
            Basis::Cosine => t.cos(),
        }
    }
}

/// Basis functions used for the x and y components of a paired term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasisPair {
    pub x: Basis,
    pub y: Basis,
}

impl BasisPair {
    pub const COS_SIN: BasisPair = BasisPair {
        x: Basis::Cosine,
        y: Basis::Sine,
    };
    pub const SIN_COS: BasisPair = BasisPair {
        x: Basis::Sine,
        y: Basis::Cosine,
    };
}

/// Source of the uniform draws and pool indices consumed during sampling.
pub trait DrawSource {
    /// Uniform value in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform index in `[0, len)`; `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    fn coin(&mut self) -> bool {
        self.uniform() < 0.5
    }
}

impl DrawSource for CurveRng {
    fn uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Everything needed to evaluate one curve. Immutable once sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveParameters {
    /// Base harmonic count N (7 or 11).
    pub harmonics: u32,
    /// Phase pitch `floor(1 + u*(N-1)) / N`.
    pub pitch: f64,
    /// Coefficients h[0..8]; h[1] and h[4] stay zero up to sign.
    pub coefficients: [f64; 8],
    pub frequencies: [f64; 8],
    /// Paired bases for indices 0 and 1.
    pub pairs: [BasisPair; 2],
    /// Single bases; entries 0 and 1 mirror the x component of `pairs`.
    pub bases: [Basis; 8],
    pub signs: [f64; 3],
    pub damping: DampingForm,
}

/// Parameters plus the generator left positioned right after sampling.
pub struct SampledCurve {
    pub params: CurveParameters,
    pub rng: CurveRng,
}

/// Sample the parameters for `name` under `config`.
pub fn sample(name: &str, config: &HashConfig) -> CurveResult<SampledCurve> {
    let mut rng = seeded_rng(name, config.seed_modulus);
    let params = sample_with(&mut rng, &config.variant.profile(), config.sign_mode)?;
    tracing::debug!(
        name,
        harmonics = params.harmonics,
        pitch = params.pitch,
        "sampled curve parameters"
    );
    Ok(SampledCurve { params, rng })
}

/// Draw a full parameter set from `source`.
pub fn sample_with<S: DrawSource + ?Sized>(
    source: &mut S,
    profile: &VariantProfile,
    sign_mode: SignMode,
) -> CurveResult<CurveParameters> {
    let seven = source.coin();
    let harmonics = profile
        .fixed_harmonics
        .unwrap_or(if seven { 7 } else { 11 });

    let mut h = [0.0f64; 8];
    h[0] = 0.4 + source.uniform() * 0.2;
    h[2] = 0.3 + source.uniform() * 0.2;
    h[3] = 0.1 + source.uniform() * 0.1;
    h[5] = 1.0 + source.uniform() * 4.0;
    h[6] = 1.0 + source.uniform();
    h[7] = 1.0 + source.uniform();
    for coefficient in h.iter_mut().skip(2) {
        if source.coin() {
            *coefficient = -*coefficient;
        }
    }

    let mut pool_a = SamplingPool::new(profile.pool_a);
    let mut pool_b = SamplingPool::new(profile.pool_b);

    let n = f64::from(harmonics);
    let pitch = (1.0 + source.uniform() * (n - 1.0)).floor() / n;

    let assigned = assign_frequencies(source, &mut pool_a, &mut pool_b, pitch)?;
    let signs = draw_signs(source, sign_mode);

    Ok(CurveParameters {
        harmonics,
        pitch,
        coefficients: h,
        frequencies: assigned.frequencies,
        pairs: assigned.pairs,
        bases: assigned.bases,
        signs,
        damping: profile.damping,
    })
}

/// Frequencies and bases chosen from the two pools.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyAssignment {
    pub frequencies: [f64; 8],
    pub pairs: [BasisPair; 2],
    pub bases: [Basis; 8],
}

/// Draw the eight frequencies, consuming both pools.
///
/// Indices 0 and 1 take a paired basis and are offset by `pitch`. Indices 2..8
/// pick a pool on a coin, fall back to whichever pool still has entries, and
/// are negated on a second coin.
pub fn assign_frequencies<S: DrawSource + ?Sized>(
    source: &mut S,
    pool_a: &mut SamplingPool,
    pool_b: &mut SamplingPool,
    pitch: f64,
) -> CurveResult<FrequencyAssignment> {
    let mut frequencies = [0.0f64; 8];
    let mut pairs = [BasisPair::SIN_COS; 2];
    let mut bases = [Basis::Sine; 8];

    for i in 0..2 {
        if source.coin() {
            pairs[i] = BasisPair::COS_SIN;
            frequencies[i] = f64::from(pop(source, pool_a, i)?) - pitch;
        } else {
            pairs[i] = BasisPair::SIN_COS;
            frequencies[i] = f64::from(pop(source, pool_b, i)?) + pitch;
        }
        bases[i] = pairs[i].x;
    }

    for i in 2..8 {
        let mut use_a = source.coin();
        if pool_a.is_empty() {
            use_a = false;
        }
        if pool_b.is_empty() {
            use_a = true;
        }
        let pool = if use_a { &mut *pool_a } else { &mut *pool_b };
        let mut frequency = f64::from(pop(source, pool, i)?);
        if source.coin() {
            frequency = -frequency;
        }
        frequencies[i] = frequency;
        bases[i] = if use_a { Basis::Cosine } else { Basis::Sine };
    }

    Ok(FrequencyAssignment {
        frequencies,
        pairs,
        bases,
    })
}

fn pop<S: DrawSource + ?Sized>(
    source: &mut S,
    pool: &mut SamplingPool,
    index: usize,
) -> CurveResult<i32> {
    if pool.is_empty() {
        return Err(CurveError::PoolsExhausted { index });
    }
    let slot = source.index(pool.len());
    pool.take(slot).ok_or(CurveError::PoolsExhausted { index })
}

fn draw_signs<S: DrawSource + ?Sized>(source: &mut S, mode: SignMode) -> [f64; 3] {
    let mut signs = [0.0f64; 3];
    for sign in &mut signs {
        let positive = source.coin();
        *sign = match mode {
            SignMode::Coin if positive => 1.0,
            SignMode::Coin => -1.0,
            SignMode::AlwaysNegative => -1.0,
        };
    }
    signs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::variant::{Variant, POOL_A_ODD, POOL_A_WIDE, POOL_B_EVEN};
    use std::collections::VecDeque;

    /// Replays a fixed list of uniforms; pool indices are always 0.
    struct Scripted {
        uniforms: VecDeque<f64>,
        consumed: usize,
    }

    impl Scripted {
        fn new(uniforms: &[f64]) -> Self {
            Self {
                uniforms: uniforms.iter().copied().collect(),
                consumed: 0,
            }
        }
    }

    impl DrawSource for Scripted {
        fn uniform(&mut self) -> f64 {
            self.consumed += 1;
            self.uniforms.pop_front().unwrap_or(0.9)
        }

        fn index(&mut self, _len: usize) -> usize {
            0
        }
    }

    const HEADS: f64 = 0.25;
    const TAILS: f64 = 0.75;

    /// Coin script for the frequency stage: 2 pair coins, then (choice, negate) x 6.
    fn frequency_script(mask: u32) -> Vec<f64> {
        let flip = |bit: u32| if mask & (1 << bit) != 0 { HEADS } else { TAILS };
        let mut script = vec![flip(0), flip(1)];
        for bit in 2..8 {
            script.push(flip(bit));
            script.push(TAILS);
        }
        script
    }

    #[test]
    fn test_pools_never_both_exhausted() {
        for pool_a in [POOL_A_ODD, POOL_A_WIDE] {
            for mask in 0..(1u32 << 8) {
                let mut source = Scripted::new(&frequency_script(mask));
                let mut a = SamplingPool::new(pool_a);
                let mut b = SamplingPool::new(POOL_B_EVEN);
                let result = assign_frequencies(&mut source, &mut a, &mut b, 0.5);
                assert!(result.is_ok(), "mask {mask:08b} exhausted the pools");
                assert_eq!(a.len() + b.len(), pool_a.len() + POOL_B_EVEN.len() - 8);
            }
        }
    }

    #[test]
    fn test_empty_odd_pool_forces_even_pool() {
        // every coin asks for the odd pool, which runs dry after six pops
        let mut source = Scripted::new(&frequency_script(0xff));
        let mut a = SamplingPool::new(POOL_A_ODD);
        let mut b = SamplingPool::new(POOL_B_EVEN);
        let assigned = assign_frequencies(&mut source, &mut a, &mut b, 0.5).unwrap();
        assert!(a.is_empty());
        assert_eq!(b.len(), POOL_B_EVEN.len() - 2);
        assert_eq!(assigned.bases[5], Basis::Cosine);
        assert_eq!(assigned.bases[6], Basis::Sine);
        assert_eq!(assigned.bases[7], Basis::Sine);
    }

    #[test]
    fn test_exhausted_pools_fail_fast() {
        let mut source = Scripted::new(&frequency_script(0));
        let mut a = SamplingPool::new(&[1]);
        let mut b = SamplingPool::new(&[0, 2]);
        let err = assign_frequencies(&mut source, &mut a, &mut b, 0.5).unwrap_err();
        assert_eq!(err, CurveError::PoolsExhausted { index: 3 });
    }

    #[test]
    fn test_pair_frequencies_offset_by_pitch() {
        let mut source = Scripted::new(&[HEADS, TAILS]);
        let mut a = SamplingPool::new(POOL_A_ODD);
        let mut b = SamplingPool::new(POOL_B_EVEN);
        let assigned = assign_frequencies(&mut source, &mut a, &mut b, 0.25).unwrap();
        assert_eq!(assigned.pairs[0], BasisPair::COS_SIN);
        assert_eq!(assigned.frequencies[0], 1.0 - 0.25);
        assert_eq!(assigned.pairs[1], BasisPair::SIN_COS);
        assert_eq!(assigned.frequencies[1], 0.0 + 0.25);
        assert_eq!(assigned.bases[0], Basis::Cosine);
        assert_eq!(assigned.bases[1], Basis::Sine);
    }

    #[test]
    fn test_negation_coin() {
        let mut script = vec![TAILS, TAILS];
        // index 2: even pool, negate
        script.extend([TAILS, HEADS]);
        let mut source = Scripted::new(&script);
        let mut a = SamplingPool::new(POOL_A_ODD);
        let mut b = SamplingPool::new(&[3, 5, 7, 9, 11, 13, 15, 17]);
        let assigned = assign_frequencies(&mut source, &mut a, &mut b, 0.0).unwrap();
        // pops take slot 0: 3, then 17 (swapped in), then 15
        assert_eq!(assigned.frequencies[2], -15.0);
    }

    #[test]
    fn test_draw_count_is_fixed() {
        // 1 + 6 + 6 + 1 + 2 + 12 + 3 uniforms regardless of the outcomes
        for variant in Variant::ALL {
            for fill in [HEADS, TAILS] {
                let mut source = Scripted::new(&[fill; 64]);
                let profile = variant.profile();
                sample_with(&mut source, &profile, profile.default_signs).unwrap();
                assert_eq!(source.consumed, 31);
            }
        }
    }

    #[test]
    fn test_fixed_harmonics_still_consume_coin() {
        let profile = Variant::CurvedColored.profile();
        let mut source = Scripted::new(&[HEADS; 64]);
        let params = sample_with(&mut source, &profile, SignMode::Coin).unwrap();
        assert_eq!(params.harmonics, 11);
        assert_eq!(source.consumed, 31);

        let profile = Variant::Classic.profile();
        let mut source = Scripted::new(&[HEADS; 64]);
        let params = sample_with(&mut source, &profile, SignMode::Coin).unwrap();
        assert_eq!(params.harmonics, 7);
    }

    #[test]
    fn test_always_negative_signs_ignore_coins() {
        let profile = Variant::Polyline.profile();
        let mut source = Scripted::new(&[HEADS; 64]);
        let params = sample_with(&mut source, &profile, SignMode::AlwaysNegative).unwrap();
        assert_eq!(params.signs, [-1.0, -1.0, -1.0]);

        let mut source = Scripted::new(&[HEADS; 64]);
        let params = sample_with(&mut source, &profile, SignMode::Coin).unwrap();
        assert_eq!(params.signs, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_coefficient_ranges() {
        let config = HashConfig::for_variant(Variant::Classic);
        for i in 0..200 {
            let sampled = sample(&format!("name-{i}"), &config).unwrap();
            let h = sampled.params.coefficients;
            assert!((0.4..0.6).contains(&h[0]));
            assert!((0.3..0.5).contains(&h[2].abs()));
            assert!((0.1..0.2).contains(&h[3].abs()));
            assert_eq!(h[1], 0.0);
            assert_eq!(h[4], 0.0);
            assert!((1.0..5.0).contains(&h[5].abs()));
            assert!((1.0..2.0).contains(&h[6].abs()));
            assert!((1.0..2.0).contains(&h[7].abs()));
            let n = f64::from(sampled.params.harmonics);
            let steps = sampled.params.pitch * n;
            assert!((steps - steps.round()).abs() < 1e-9);
            assert!(steps >= 1.0 && steps <= n - 1.0);
        }
    }
}
