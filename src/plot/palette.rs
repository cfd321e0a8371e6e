//! Named color ramps for the colorized render.

use rand::seq::SliceRandom;
use rand::Rng;

/// A color ramp defined by evenly spaced RGB stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    stops: &'static [(u8, u8, u8)],
}

impl Palette {
    /// Color at `t` in `[0, 1]`, linearly interpolated between stops.
    pub fn sample(&self, t: f64) -> (u8, u8, u8) {
        let last = self.stops.len() - 1;
        if last == 0 {
            return self.stops[0];
        }
        let pos = t.clamp(0.0, 1.0) * last as f64;
        let i = (pos.floor() as usize).min(last - 1);
        let frac = pos - i as f64;
        let (r0, g0, b0) = self.stops[i];
        let (r1, g1, b1) = self.stops[i + 1];
        let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;
        (lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }
}

pub const PALETTES: &[Palette] = &[
    Palette {
        name: "viridis",
        stops: &[
            (68, 1, 84),
            (72, 40, 120),
            (62, 73, 137),
            (49, 104, 142),
            (38, 130, 142),
            (31, 158, 137),
            (53, 183, 121),
            (110, 206, 88),
            (181, 222, 43),
            (253, 231, 37),
        ],
    },
    Palette {
        name: "plasma",
        stops: &[
            (13, 8, 135),
            (70, 3, 159),
            (114, 1, 168),
            (156, 23, 158),
            (189, 55, 134),
            (216, 87, 107),
            (237, 121, 83),
            (251, 159, 58),
            (253, 202, 38),
            (240, 249, 33),
        ],
    },
    Palette {
        name: "inferno",
        stops: &[
            (0, 0, 4),
            (27, 12, 65),
            (74, 12, 107),
            (120, 28, 109),
            (165, 44, 96),
            (207, 68, 70),
            (237, 105, 37),
            (251, 155, 6),
            (247, 209, 61),
            (252, 255, 164),
        ],
    },
    Palette {
        name: "magma",
        stops: &[
            (0, 0, 4),
            (24, 15, 61),
            (68, 15, 118),
            (114, 31, 129),
            (158, 47, 127),
            (205, 64, 113),
            (241, 96, 93),
            (253, 150, 104),
            (254, 202, 141),
            (252, 253, 191),
        ],
    },
    Palette {
        name: "cividis",
        stops: &[
            (0, 34, 78),
            (18, 53, 112),
            (59, 73, 108),
            (87, 93, 109),
            (112, 113, 115),
            (138, 134, 120),
            (165, 156, 116),
            (195, 179, 105),
            (225, 204, 85),
            (254, 232, 56),
        ],
    },
    Palette {
        name: "twilight",
        stops: &[
            (226, 217, 226),
            (94, 130, 185),
            (48, 20, 82),
            (164, 66, 80),
            (226, 217, 226),
        ],
    },
    Palette {
        name: "cool",
        stops: &[(0, 255, 255), (255, 0, 255)],
    },
    Palette {
        name: "spring",
        stops: &[(255, 0, 255), (255, 255, 0)],
    },
];

/// `count` evenly spaced values from 0 to 1 inclusive.
pub fn linspace(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let denom = (count - 1) as f64;
            (0..count).map(|i| i as f64 / denom).collect()
        }
    }
}

/// Pick a palette and one color per segment.
///
/// Draws the palette index first, then shuffles the ramp positions, so the
/// caller must pass the generator only after curve sampling has finished.
pub fn segment_colors<R: Rng + ?Sized>(
    rng: &mut R,
    segments: usize,
) -> (&'static Palette, Vec<(u8, u8, u8)>) {
    let palette = &PALETTES[rng.gen_range(0..PALETTES.len())];
    let mut positions = linspace(segments);
    positions.shuffle(rng);
    let colors = positions.iter().map(|&t| palette.sample(t)).collect();
    (palette, colors)
}
