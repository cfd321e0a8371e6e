use crate::curve::variant::{SignMode, Variant};

/// Curve points per image.
pub const DEFAULT_POINT_COUNT: usize = 4620;
/// Points resampled along the smoothed spline.
pub const DEFAULT_SMOOTHING_SAMPLES: usize = 5000;
/// Seed modulus of the classic and polyline families.
pub const MODULUS_POW2_32: u64 = 1 << 32;
/// Seed modulus of the curved family, 3^33.
pub const MODULUS_POW3_33: u64 = 5_559_060_566_555_523;
/// Target grid spacing in data units for the scatter render.
pub const DEFAULT_GRID_STEP: f64 = 50.0;

/// Immutable per-image constants handed to the sampler, evaluator and renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct HashConfig {
    pub variant: Variant,
    /// Canvas size in pixels.
    pub width: u32,
    pub height: u32,
    pub point_count: usize,
    pub smoothing_samples: usize,
    /// Unit curve coordinates are mapped through `v * scale + offset`.
    pub scale: f64,
    pub offset: f64,
    pub seed_modulus: u64,
    pub sign_mode: SignMode,
    /// Data range shown on both axes.
    pub window_min: f64,
    pub window_max: f64,
    pub grid_step: f64,
}

impl HashConfig {
    pub fn for_variant(variant: Variant) -> Self {
        let sign_mode = variant.profile().default_signs;
        match variant {
            Variant::Classic => Self {
                variant,
                width: 1000,
                height: 1000,
                point_count: DEFAULT_POINT_COUNT,
                smoothing_samples: DEFAULT_SMOOTHING_SAMPLES,
                scale: 110.0,
                offset: 200.0,
                seed_modulus: MODULUS_POW2_32,
                sign_mode,
                window_min: -102.5,
                window_max: 502.5,
                grid_step: DEFAULT_GRID_STEP,
            },
            Variant::CurvedColored => Self {
                variant,
                width: 500,
                height: 500,
                point_count: DEFAULT_POINT_COUNT,
                smoothing_samples: DEFAULT_SMOOTHING_SAMPLES,
                scale: 100.0,
                offset: 200.0,
                seed_modulus: MODULUS_POW3_33,
                sign_mode,
                window_min: -75.0,
                window_max: 475.0,
                grid_step: DEFAULT_GRID_STEP,
            },
            // clipped to the 0..400 window
            Variant::Polyline => Self {
                variant,
                width: 400,
                height: 400,
                point_count: DEFAULT_POINT_COUNT,
                smoothing_samples: DEFAULT_SMOOTHING_SAMPLES,
                scale: 100.0,
                offset: 200.0,
                seed_modulus: MODULUS_POW2_32,
                sign_mode,
                window_min: 0.0,
                window_max: 400.0,
                grid_step: DEFAULT_GRID_STEP,
            },
        }
    }

    pub fn with_sign_mode(mut self, sign_mode: SignMode) -> Self {
        self.sign_mode = sign_mode;
        self
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Classic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::eval::UNIT_BOUND;

    #[test]
    fn test_pow3_modulus() {
        assert_eq!(MODULUS_POW3_33, 3u64.pow(33));
    }

    #[test]
    fn test_unclipped_windows_contain_curve() {
        for variant in [Variant::Classic, Variant::CurvedColored] {
            let c = HashConfig::for_variant(variant);
            assert!(c.window_min <= c.offset - UNIT_BOUND * c.scale);
            assert!(c.window_max >= c.offset + UNIT_BOUND * c.scale);
        }
    }

    #[test]
    fn test_sign_mode_override() {
        let c = HashConfig::for_variant(Variant::Polyline);
        assert_eq!(c.sign_mode, SignMode::AlwaysNegative);
        assert_eq!(c.with_sign_mode(SignMode::Coin).sign_mode, SignMode::Coin);
    }
}
