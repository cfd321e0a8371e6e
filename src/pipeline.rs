//! The full name -> seed -> parameters -> points -> PNG pipeline.

use crate::config::HashConfig;
use crate::curve::{evaluate, sample, CurveParameters, PointSequence, SampledCurve, Variant};
use crate::error::Result;
use crate::plot::palette::segment_colors;
use crate::plot::{render_colored, render_polyline, render_scatter, RenderedHash};

/// Suffix appended to download file names.
pub const DOWNLOAD_SUFFIX: &str = "_visual_hash.png";

/// Renders visual hashes under one fixed configuration.
///
/// Holds no per-request state; every call builds its own generator, pools
/// and buffers, so one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct VisualHasher {
    config: HashConfig,
}

impl VisualHasher {
    pub fn new(config: HashConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    pub fn parameters(&self, name: &str) -> Result<CurveParameters> {
        Ok(sample(name, &self.config)?.params)
    }

    pub fn points(&self, name: &str) -> Result<PointSequence> {
        let sampled = sample(name, &self.config)?;
        Ok(evaluate(&sampled.params, &self.config))
    }

    /// Render the image for `name` with the variant's renderer.
    pub fn render(&self, name: &str) -> Result<RenderedHash> {
        let SampledCurve { params, mut rng } = sample(name, &self.config)?;
        let points = evaluate(&params, &self.config);
        let rendered = match self.config.variant {
            Variant::Classic => render_scatter(&points, &self.config)?,
            Variant::Polyline => render_polyline(&points, &self.config)?,
            Variant::CurvedColored => {
                let segments = self.config.smoothing_samples.saturating_sub(1);
                let (palette, colors) = segment_colors(&mut rng, segments);
                tracing::debug!(name, palette = palette.name, "colorizing spline");
                render_colored(&points, &colors, &self.config)?
            }
        };
        tracing::debug!(
            name,
            variant = %self.config.variant,
            bytes = rendered.png_bytes.len(),
            "rendered visual hash"
        );
        Ok(rendered)
    }
}

/// Attachment file name: lowercased, spaces to hyphens, `_visual_hash.png` suffix.
///
/// Characters outside ASCII letters, digits, `-` and `_` become `_` so the
/// name is always a valid header value.
pub fn download_filename(name: &str) -> String {
    let stem: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' => '-',
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => c,
            _ => '_',
        })
        .collect();
    format!("{}{}", stem, DOWNLOAD_SUFFIX)
}
