/// Render constants and rendered output types.
use base64::Engine;
use thiserror::Error;

/// Background of the scatter and polyline renders.
pub const LIGHT_BG: (u8, u8, u8) = (255, 255, 255);
/// Background of the colorized render (Catppuccin Mocha base).
pub const DARK_BG: (u8, u8, u8) = (30, 30, 46);
/// Grid line color for the scatter render.
pub const GRID_COLOR: (u8, u8, u8) = (176, 176, 176);
/// Ink for dots and polylines.
pub const INK: (u8, u8, u8) = (0, 0, 0);

/// Pixel margin around the plotting area.
pub const MARGIN: u32 = 10;
/// Radius of one scatter dot in pixels.
pub const DOT_RADIUS: i32 = 2;
/// Stroke width of the polyline render.
pub const POLYLINE_WIDTH: u32 = 6;
/// Stroke width of each colored spline segment.
pub const SEGMENT_WIDTH: u32 = 2;

/// Prefix of an inline PNG data URL.
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// A rendered visual hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHash {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RenderedHash {
    /// The PNG as a `data:image/png;base64,...` URL.
    pub fn data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.png_bytes);
        format!("{}{}", DATA_URL_PREFIX, encoded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{stage}: {message}")]
    Draw { stage: &'static str, message: String },

    #[error("PNG encode: {0}")]
    Encode(String),

    #[error("{0}")]
    InvalidInput(String),
}
