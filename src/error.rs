use thiserror::Error;

use crate::config::ConfigError;
use crate::curve::CurveError;
use crate::plot::RenderError;

/// Any failure of the name -> image pipeline or its setup.
#[derive(Debug, Error)]
pub enum Error {
    #[error("curve sampling failed: {0}")]
    Curve(#[from] CurveError),

    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
