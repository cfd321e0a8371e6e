pub mod palette;
pub mod render;
pub mod spline;
pub mod types;

pub use render::{render_colored, render_polyline, render_scatter};
pub use types::{RenderError, RenderedHash};
