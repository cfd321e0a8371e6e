//! The three curve families and the literals that distinguish them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Odd frequency candidates shared by the classic and polyline families.
pub const POOL_A_ODD: &[i32] = &[1, 3, 5, 7, 9, 11];
/// Wider odd pool of the curved family (note the repeated 1).
pub const POOL_A_WIDE: &[i32] = &[1, 1, 3, 5, 7, 9, 11, 13, 15];
/// Even frequency candidates, zero repeated.
pub const POOL_B_EVEN: &[i32] = &[0, 0, 2, 4, 6, 8, 10];

/// Which curve family (and matching renderer) to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Scatter of unconnected dots on a light grid.
    #[default]
    Classic,
    /// Smoothed closed spline painted with a shuffled colormap.
    CurvedColored,
    /// Thick rounded polyline.
    Polyline,
}

/// How the three sign multipliers are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignMode {
    /// Each multiplier is +1 or -1 on a coin flip.
    Coin,
    /// Coins are still drawn but every multiplier is -1. Legacy polyline behavior.
    AlwaysNegative,
}

/// The amplitude term multiplying the phase perturbation `c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DampingForm {
    /// `a - (1 - h[0])`
    ShiftedDown,
    /// `a - (1 + h[0])`
    ShiftedUp,
}

impl DampingForm {
    pub fn apply(self, a: f64, h0: f64) -> f64 {
        match self {
            DampingForm::ShiftedDown => a - (1.0 - h0),
            DampingForm::ShiftedUp => a - (1.0 + h0),
        }
    }
}

/// Literal constants that differ between families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantProfile {
    /// Harmonic count forced regardless of the coin; the coin is drawn either way.
    pub fixed_harmonics: Option<u32>,
    pub pool_a: &'static [i32],
    pub pool_b: &'static [i32],
    pub damping: DampingForm,
    pub default_signs: SignMode,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Classic, Variant::CurvedColored, Variant::Polyline];

    pub fn profile(self) -> VariantProfile {
        match self {
            Variant::Classic => VariantProfile {
                fixed_harmonics: None,
                pool_a: POOL_A_ODD,
                pool_b: POOL_B_EVEN,
                damping: DampingForm::ShiftedDown,
                default_signs: SignMode::Coin,
            },
            Variant::CurvedColored => VariantProfile {
                fixed_harmonics: Some(11),
                pool_a: POOL_A_WIDE,
                pool_b: POOL_B_EVEN,
                damping: DampingForm::ShiftedUp,
                default_signs: SignMode::Coin,
            },
            Variant::Polyline => VariantProfile {
                fixed_harmonics: None,
                pool_a: POOL_A_ODD,
                pool_b: POOL_B_EVEN,
                damping: DampingForm::ShiftedDown,
                default_signs: SignMode::AlwaysNegative,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::CurvedColored => "curved-colored",
            Variant::Polyline => "polyline",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that names no known variant or sign mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Variant {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "curved-colored" | "curved" | "colored" => Ok(Variant::CurvedColored),
            "polyline" => Ok(Variant::Polyline),
            other => Err(ParseNameError {
                kind: "variant",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for SignMode {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coin" => Ok(SignMode::Coin),
            "always-negative" => Ok(SignMode::AlwaysNegative),
            other => Err(ParseNameError {
                kind: "sign mode",
                value: other.to_string(),
            }),
        }
    }
}
