//! Deterministic visual hashes: a name is hashed into a seed, the seed drives
//! a sampler that picks the coefficients, frequencies and basis functions of a
//! closed trigonometric curve, and the curve is rendered to a PNG.

pub mod config;
pub mod curve;
pub mod error;
pub mod pipeline;
pub mod plot;
pub mod web;

pub use config::{HashConfig, Settings};
pub use curve::{CurveParameters, PointSequence, SignMode, Variant};
pub use error::{Error, Result};
pub use pipeline::{download_filename, VisualHasher};
pub use plot::RenderedHash;
