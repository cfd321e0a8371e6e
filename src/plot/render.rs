/// Rendering pipeline: point sequence -> PNG bytes via plotters.

use crate::config::HashConfig;
use crate::curve::PointSequence;
use crate::plot::spline::PeriodicSpline;
use crate::plot::types::*;
use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

type HashChart<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}

fn draw_err<E: std::fmt::Display>(stage: &'static str) -> impl FnOnce(E) -> RenderError {
    move |e| RenderError::Draw {
        stage,
        message: e.to_string(),
    }
}

/// Set up a square chart over the configured window, run `draw`, and encode the result.
fn render_with<F>(config: &HashConfig, background: (u8, u8, u8), draw: F) -> Result<RenderedHash, RenderError>
where
    F: FnOnce(&mut HashChart<'_, '_>) -> Result<(), RenderError>,
{
    let width = config.width;
    let height = config.height;
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidInput(format!("canvas {}x{} is empty", width, height)));
    }
    if !(config.window_min < config.window_max) {
        return Err(RenderError::InvalidInput(format!(
            "window {}..{} is empty",
            config.window_min, config.window_max
        )));
    }
    let mut buf = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&rgb(background)).map_err(draw_err("fill"))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(MARGIN)
            .build_cartesian_2d(config.window_min..config.window_max, config.window_min..config.window_max)
            .map_err(draw_err("chart build"))?;

        draw(&mut chart)?;

        root.present().map_err(draw_err("present"))?;
    }

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;

    Ok(RenderedHash {
        png_bytes,
        width,
        height,
    })
}

/// Unconnected dots over a light grid, no axes or labels.
pub fn render_scatter(points: &PointSequence, config: &HashConfig) -> Result<RenderedHash, RenderError> {
    let lines = mesh_lines(config.window_min, config.window_max, config.grid_step);
    render_with(config, LIGHT_BG, |chart| {
        chart
            .configure_mesh()
            .disable_axes()
            .bold_line_style(rgb(GRID_COLOR).stroke_width(1))
            .light_line_style(rgb(LIGHT_BG))
            .x_labels(lines)
            .y_labels(lines)
            .draw()
            .map_err(draw_err("grid"))?;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), DOT_RADIUS, rgb(INK).filled())),
            )
            .map_err(draw_err("scatter"))?;
        Ok(())
    })
}

/// Points joined in order by one thick stroke with rounded joints.
pub fn render_polyline(points: &PointSequence, config: &HashConfig) -> Result<RenderedHash, RenderError> {
    let cap = (POLYLINE_WIDTH / 2) as i32;
    render_with(config, LIGHT_BG, |chart| {
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                rgb(INK).stroke_width(POLYLINE_WIDTH),
            ))
            .map_err(draw_err("polyline"))?;
        chart
            .draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), cap, rgb(INK).filled())))
            .map_err(draw_err("joints"))?;
        Ok(())
    })
}

/// Closed spline through the points, drawn segment by segment in `colors` on a dark background.
///
/// `colors[i]` paints the segment from resampled point `i` to `i + 1`; the
/// spline is resampled at `colors.len() + 1` parameters.
pub fn render_colored(
    points: &PointSequence,
    colors: &[(u8, u8, u8)],
    config: &HashConfig,
) -> Result<RenderedHash, RenderError> {
    let spline = PeriodicSpline::fit(points.as_slice())
        .ok_or_else(|| RenderError::InvalidInput("no points to smooth".to_string()))?;
    let dense = spline.resample(colors.len() + 1);
    render_with(config, DARK_BG, |chart| {
        chart
            .draw_series(dense.windows(2).zip(colors).map(|(pair, &color)| {
                PathElement::new(vec![pair[0], pair[1]], rgb(color).stroke_width(SEGMENT_WIDTH))
            }))
            .map_err(draw_err("segments"))?;
        Ok(())
    })
}

/// Mesh lines per axis for a grid about `step` data units apart.
///
/// Plotters snaps the mesh to round values, so a 50-unit step over the
/// classic window lands on -100, -50, ..., 500.
fn mesh_lines(min: f64, max: f64, step: f64) -> usize {
    if !(step > 0.0) || !(min < max) {
        return 0;
    }
    ((max - min) / step).floor() as usize + 1
}

/// Encode a raw RGB pixel buffer to PNG.
fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder
        .write_image(rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    Ok(png)
}
